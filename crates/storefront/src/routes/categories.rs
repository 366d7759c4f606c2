//! Category route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{info, instrument};

use mark_store_core::{Category, CategoryId, NewCategory, Product};

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::validation;

/// List categories.
///
/// GET /api/categories
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.store().get_all_categories())
}

/// Create a category. Duplicate names are accepted.
///
/// POST /api/categories
///
/// # Errors
///
/// Returns `AppError::Validation` for a blank name.
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewCategory>,
) -> Result<(StatusCode, Json<Category>)> {
    let input = validation::category(input)?;
    let category = state.store().create_category(input);
    info!(category_id = %category.id, name = %category.name, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// Get a category.
///
/// GET /api/categories/{id}
///
/// # Errors
///
/// Returns `AppError::NotFound` if the category does not exist.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Category>> {
    state
        .store()
        .get_category(id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("category", id))
}

/// Delete a category. Its products are kept and keep their `categoryId`.
///
/// DELETE /api/categories/{id}
///
/// # Errors
///
/// Returns `AppError::NotFound` if the category does not exist.
#[instrument(skip(state))]
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<StatusCode> {
    if !state.store().delete_category(id) {
        return Err(AppError::not_found("category", id));
    }
    info!(category_id = %id, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// List the products filed under a category id.
///
/// GET /api/categories/{id}/products
///
/// The id is matched as-is, so products of a deleted category are still
/// listed.
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Json<Vec<Product>> {
    Json(state.store().get_products_by_category(id))
}
