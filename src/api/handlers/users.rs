//! Handlers for user registration and listing endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::user::{CreateUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user account.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// {
///   "username": "mixxo",
///   "name": "Mixxo",
///   "password": "sekret"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the username or password is shorter than 3
/// characters. Returns 409 Conflict if the username is taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .register(payload.username, payload.name, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Lists every registered user.
///
/// # Endpoint
///
/// `GET /api/users`
///
/// Password material is never included in the response.
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
