//! API route configuration.

use crate::api::handlers::{
    create_article_handler, create_comment_handler, create_user_handler, delete_article_handler,
    delete_comment_handler, get_article_handler, get_comment_handler, get_user_handler,
    list_articles_handler, list_comments_handler, list_users_handler, update_article_handler,
    update_comment_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All resource routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /users`           - List users
/// - `POST   /users`           - Create a user
/// - `GET    /users/{id}`      - Fetch a user
/// - `PATCH  /users/{id}`      - Partially update a user
/// - `GET    /articles`        - List articles
/// - `POST   /articles`        - Create an article
/// - `GET    /articles/{id}`   - Fetch an article
/// - `PATCH  /articles/{id}`   - Partially update an article
/// - `DELETE /articles/{id}`   - Delete an article
/// - `GET    /comments`        - List comments
/// - `POST   /comments`        - Create a comment
/// - `GET    /comments/{id}`   - Fetch a comment
/// - `PATCH  /comments/{id}`   - Partially update a comment
/// - `DELETE /comments/{id}`   - Delete a comment
///
/// Users have no delete route.
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler).patch(update_user_handler),
        )
        .route(
            "/articles",
            get(list_articles_handler).post(create_article_handler),
        )
        .route(
            "/articles/{id}",
            get(get_article_handler)
                .patch(update_article_handler)
                .delete(delete_article_handler),
        )
        .route(
            "/comments",
            get(list_comments_handler).post(create_comment_handler),
        )
        .route(
            "/comments/{id}",
            get(get_comment_handler)
                .patch(update_comment_handler)
                .delete(delete_comment_handler),
        )
}
