//! User route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use mark_store_core::{User, UserId};

use crate::error::{AppError, Result, set_sentry_user};
use crate::models::{LoginRequest, RegisterRequest};
use crate::services::AccountService;
use crate::state::AppState;

fn accounts(state: &AppState) -> AccountService<'_> {
    AccountService::new(state.store(), &state.config().admin_phone)
}

/// List users.
///
/// GET /api/users
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store().get_all_users())
}

/// Get a user.
///
/// GET /api/users/{id}
///
/// # Errors
///
/// Returns `AppError::NotFound` if the user does not exist.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<UserId>) -> Result<Json<User>> {
    state
        .store()
        .get_user(id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("user", id))
}

/// Register a customer.
///
/// POST /api/users/register
///
/// # Errors
///
/// Returns `AppError::Validation` if the form is incomplete.
#[instrument(skip(state, request))]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = accounts(&state).register(request)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in by phone number.
///
/// POST /api/users/login
///
/// # Errors
///
/// Returns `AppError::Unauthorized` if no user has the phone number.
#[instrument(skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<User>> {
    let user = accounts(&state).login(&request)?;
    set_sentry_user(&user.id);
    Ok(Json(user))
}
