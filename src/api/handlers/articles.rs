//! Handlers for article endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
};

use crate::api::body::JsonFields;
use crate::domain::entities::Article;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all articles.
///
/// # Endpoint
///
/// `GET /api/articles`
pub async fn list_articles_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Article>>, AppError> {
    let articles = state.article_service.list_articles().await?;
    Ok(Json(articles))
}

/// Returns a single article.
///
/// # Endpoint
///
/// `GET /api/articles/{id}`
pub async fn get_article_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Article>, AppError> {
    let id = Article::SCHEMA.parse_id(&id)?;
    let article = state.article_service.get_article(id).await?;
    Ok(Json(article))
}

/// Creates an article.
///
/// # Endpoint
///
/// `POST /api/articles`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Test new article",
///   "content": "test article content",
///   "modified": "2018-03-03T00:00:00.000Z",
///   "authorid": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 400 for a missing or mistyped field.
/// Returns 500 if `authorid` does not reference a user.
pub async fn create_article_handler(
    State(state): State<AppState>,
    JsonFields(fields): JsonFields,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Article>), AppError> {
    let article = state.article_service.create_article(fields).await?;
    let location = Article::SCHEMA.location(article.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(article)))
}

/// Partially updates an article.
///
/// # Endpoint
///
/// `PATCH /api/articles/{id}`
///
/// Only `title`, `modified` and `content` are applied. Responds 204.
pub async fn update_article_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    JsonFields(fields): JsonFields,
) -> Result<StatusCode, AppError> {
    let id = Article::SCHEMA.parse_id(&id)?;
    state.article_service.update_article(id, fields).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Deletes an article and its comments.
///
/// # Endpoint
///
/// `DELETE /api/articles/{id}`
///
/// # Errors
///
/// Returns 404 `Article doesn't exist` if there is no such row.
pub async fn delete_article_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = Article::SCHEMA.parse_id(&id)?;
    state.article_service.delete_article(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
