//! Business logic services for storefront.
//!
//! # Services
//!
//! - `catalog` - Storefront browse view (category join, search, filter)
//! - `accounts` - Phone-number registration and login
//! - `orders` - Order pricing and Telegram notification
//!
//! Services borrow what they need from [`AppState`](crate::state::AppState)
//! and are constructed per request.

pub mod accounts;
pub mod catalog;
pub mod orders;

pub use accounts::AccountService;
pub use catalog::CatalogService;
pub use orders::OrderService;
