//! Order submission.

use axum::{Extension, Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequestId;
use crate::models::{Order, OrderRequest};
use crate::services::OrderService;
use crate::state::AppState;

/// Price an order and send it to the store owner.
///
/// POST /api/orders
///
/// Returns 202 with the priced order once the notification is delivered.
///
/// # Errors
///
/// - 400 for an invalid form
/// - 404 if an item references an unknown product
/// - 502 if the notification could not be delivered
/// - 503 if notifications are not configured
#[instrument(skip(state, request, request_id), fields(request_id = %request_id.0))]
pub async fn create(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<OrderRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    let service = OrderService::new(
        state.store(),
        state.config().orders.delivery_fee,
        state.telegram(),
    );
    let order = service.submit(request).await?;
    Ok((StatusCode::ACCEPTED, Json(order)))
}
