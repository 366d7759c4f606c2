//! Storefront browse view.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::models::{BrowseQuery, CatalogEntry};
use crate::services::CatalogService;
use crate::state::AppState;

/// Products with category names, filtered by search text and category.
///
/// GET /api/catalog?q=&category=
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Json<Vec<CatalogEntry>> {
    Json(CatalogService::new(state.store()).browse(&query))
}
