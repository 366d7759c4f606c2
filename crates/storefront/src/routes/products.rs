//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::{info, instrument};

use mark_store_core::{NewProduct, Product, ProductId, ProductPatch};

use crate::error::{AppError, Result};
use crate::models::ProductsQuery;
use crate::state::AppState;
use crate::validation;

/// List products, optionally only those with a given `categoryId`.
///
/// GET /api/products
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Json<Vec<Product>> {
    let store = state.store();
    Json(match query.category_id {
        Some(category_id) => store.get_products_by_category(category_id),
        None => store.get_all_products(),
    })
}

/// Create a product.
///
/// POST /api/products
///
/// The category is not checked; any `categoryId` is stored as given.
///
/// # Errors
///
/// Returns `AppError::Validation` for blank fields, a bad image reference or
/// a non-positive price.
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    validation::new_product(&input)?;
    let product = state.store().create_product(input);
    info!(
        product_id = %product.id,
        category_id = %product.category_id,
        price = %product.price,
        "Product created"
    );
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product.
///
/// GET /api/products/{id}
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product does not exist.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .store()
        .get_product(id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("product", id))
}

/// Update the provided fields of a product.
///
/// PUT /api/products/{id} (PATCH is routed here too)
///
/// # Errors
///
/// Returns `AppError::Validation` for an invalid field and
/// `AppError::NotFound` if the product does not exist.
#[instrument(skip(state, patch))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    validation::product_patch(&patch)?;
    let product = state
        .store()
        .update_product(id, patch)
        .ok_or_else(|| AppError::not_found("product", id))?;
    info!(product_id = %id, "Product updated");
    Ok(Json(product))
}

/// Delete a product.
///
/// DELETE /api/products/{id}
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product does not exist.
#[instrument(skip(state))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    if !state.store().delete_product(id) {
        return Err(AppError::not_found("product", id));
    }
    info!(product_id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
