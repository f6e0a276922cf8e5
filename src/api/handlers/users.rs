//! Handlers for user endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
};

use crate::api::body::JsonFields;
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Returns a single user.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// Returns 404 `User doesn't exist` if the id does not resolve to a row.
pub async fn get_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<User>, AppError> {
    let id = User::SCHEMA.parse_id(&id)?;
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// { "name": "Ada", "writer": true, "admin": false, "password": "pw" }
/// ```
///
/// Responds 201 with the stored row and a `Location` header pointing at it.
///
/// # Errors
///
/// Returns 400 `Missing '<field>' in request body` for the first missing field.
pub async fn create_user_handler(
    State(state): State<AppState>,
    JsonFields(fields): JsonFields,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<User>), AppError> {
    let user = state.user_service.create_user(fields).await?;
    let location = User::SCHEMA.location(user.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PATCH /api/users/{id}`
///
/// Only `name`, `admin`, `writer` and `password` are applied. Responds 204.
///
/// # Errors
///
/// Returns 404 if the user does not exist.
/// Returns 400 if the body carries none of the updatable fields.
pub async fn update_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    JsonFields(fields): JsonFields,
) -> Result<StatusCode, AppError> {
    let id = User::SCHEMA.parse_id(&id)?;
    state.user_service.update_user(id, fields).await?;
    Ok(StatusCode::NO_CONTENT)
}
