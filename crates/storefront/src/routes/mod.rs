//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                        - Health check
//!
//! # Categories
//! GET    /api/categories                - Category listing
//! POST   /api/categories                - Create category (201)
//! GET    /api/categories/{id}           - Category detail
//! DELETE /api/categories/{id}           - Delete category (204)
//! GET    /api/categories/{id}/products  - Products filed under a category id
//!
//! # Products
//! GET    /api/products[?categoryId=N]   - Product listing
//! POST   /api/products                  - Create product (201)
//! GET    /api/products/{id}             - Product detail
//! PUT    /api/products/{id}             - Partial update (PATCH also accepted)
//! DELETE /api/products/{id}             - Delete product (204)
//!
//! # Reviews
//! GET    /api/reviews                   - Review listing
//! POST   /api/reviews                   - Post review (201)
//!
//! # Users (register/login rate limited)
//! GET    /api/users                     - User listing
//! GET    /api/users/{id}                - User detail
//! POST   /api/users/register            - Register (201)
//! POST   /api/users/login               - Login by phone number
//!
//! # Storefront
//! GET    /api/catalog[?q=&category=]    - Browse view with category names
//! POST   /api/orders                    - Submit order (202, rate limited)
//! ```

pub mod catalog;
pub mod categories;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::{auth_rate_limiter, order_rate_limiter};
use crate::state::AppState;

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index).post(categories::create))
        .route(
            "/{id}",
            get(categories::show).delete(categories::destroy),
        )
        .route("/{id}/products", get(categories::products))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .patch(products::update)
                .delete(products::destroy),
        )
}

/// Create the review routes router.
pub fn review_routes() -> Router<AppState> {
    Router::new().route("/", get(reviews::index).post(reviews::create))
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    let accounts = Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .layer(auth_rate_limiter());

    Router::new()
        .route("/", get(users::index))
        .route("/{id}", get(users::show))
        .merge(accounts)
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create))
        .layer(order_rate_limiter())
}

/// Create all API routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/categories", category_routes())
        .nest("/api/products", product_routes())
        .nest("/api/reviews", review_routes())
        .nest("/api/users", user_routes())
        .nest("/api/orders", order_routes())
        .route("/api/catalog", get(catalog::index))
}
