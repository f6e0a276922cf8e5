//! Handlers for comment endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
};

use crate::api::body::JsonFields;
use crate::domain::entities::Comment;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/comments`
pub async fn list_comments_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = state.comment_service.list_comments().await?;
    Ok(Json(comments))
}

/// `GET /api/comments/{id}`
pub async fn get_comment_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Comment>, AppError> {
    let id = Comment::SCHEMA.parse_id(&id)?;
    let comment = state.comment_service.get_comment(id).await?;
    Ok(Json(comment))
}

/// Creates a comment.
///
/// # Endpoint
///
/// `POST /api/comments`
///
/// # Request Body
///
/// ```json
/// { "content": "test comment content", "articleid": 1, "commentorid": 1 }
/// ```
pub async fn create_comment_handler(
    State(state): State<AppState>,
    JsonFields(fields): JsonFields,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Comment>), AppError> {
    let comment = state.comment_service.create_comment(fields).await?;
    let location = Comment::SCHEMA.location(comment.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(comment)))
}

/// `PATCH /api/comments/{id}`, only `content` is applied.
pub async fn update_comment_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    JsonFields(fields): JsonFields,
) -> Result<StatusCode, AppError> {
    let id = Comment::SCHEMA.parse_id(&id)?;
    state.comment_service.update_comment(id, fields).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/comments/{id}`
pub async fn delete_comment_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = Comment::SCHEMA.parse_id(&id)?;
    state.comment_service.delete_comment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
