//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ArticleService, CommentService, UserService};
use crate::domain::repositories::{ArticleRepository, CommentRepository, UserRepository};
use crate::infrastructure::persistence::{
    PgArticleRepository, PgCommentRepository, PgUserRepository,
};

/// Services and response policy shared by all requests.
///
/// Data access is injected through the repository traits, so tests can build
/// a state over in-memory doubles with [`AppState::new`].
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub article_service: Arc<ArticleService>,
    pub comment_service: Arc<CommentService>,
    /// When `false` (hardened mode) 500 responses only say `server error`.
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        articles: Arc<dyn ArticleRepository>,
        comments: Arc<dyn CommentRepository>,
        expose_error_details: bool,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users)),
            article_service: Arc::new(ArticleService::new(articles)),
            comment_service: Arc::new(CommentService::new(comments)),
            expose_error_details,
        }
    }

    /// Builds the state over PostgreSQL repositories sharing one pool.
    pub fn from_pool(pool: Arc<PgPool>, expose_error_details: bool) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgArticleRepository::new(pool.clone())),
            Arc::new(PgCommentRepository::new(pool)),
            expose_error_details,
        )
    }
}
