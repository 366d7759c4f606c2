//! Request and response types for the storefront API.
//!
//! Catalog records themselves live in `mark_store_core`; the types here are
//! the shapes that only exist at the HTTP boundary: account requests, the
//! browse view, and orders.

pub mod account;
pub mod catalog;
pub mod order;

pub use account::{LoginRequest, RegisterRequest};
pub use catalog::{BrowseQuery, CatalogEntry, ProductsQuery, UNKNOWN_CATEGORY};
pub use order::{CustomerDetails, Order, OrderItemRequest, OrderLine, OrderRequest};
