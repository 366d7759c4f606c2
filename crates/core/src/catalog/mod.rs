//! Catalog entity records.
//!
//! Each entity has a stored record (with its assigned id) and an input shape
//! used to create it. Field names are camelCase on the wire.
//!
//! Relationships between entities are soft: a [`Product`] carries a
//! [`CategoryId`](crate::CategoryId) that is never checked against existing
//! categories and is left untouched when its category is deleted.

pub mod category;
pub mod product;
pub mod review;
pub mod user;

pub use category::{Category, NewCategory};
pub use product::{NewProduct, Product, ProductPatch};
pub use review::{NewReview, Review};
pub use user::{NewUser, User};
