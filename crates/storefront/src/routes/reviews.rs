//! Review route handlers.

use axum::{Json, extract::State, http::StatusCode};
use tracing::{info, instrument};

use mark_store_core::{NewReview, Review};

use crate::error::Result;
use crate::state::AppState;
use crate::validation;

/// List reviews, oldest first.
///
/// GET /api/reviews
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(state.store().get_all_reviews())
}

/// Post a review. The date is set by the server.
///
/// POST /api/reviews
///
/// # Errors
///
/// Returns `AppError::Validation` for a blank name or comment or a rating
/// outside 1-5.
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewReview>,
) -> Result<(StatusCode, Json<Review>)> {
    let input = validation::review(input)?;
    let review = state.store().create_review(input);
    info!(review_id = %review.id, rating = review.rating, "Review created");
    Ok((StatusCode::CREATED, Json(review)))
}
