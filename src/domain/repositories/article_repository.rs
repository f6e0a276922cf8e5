//! Repository trait for article data access.

use crate::domain::entities::{Article, ArticlePatch, NewArticle};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `articles` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArticleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Lists every article ordered by id.
    async fn list(&self) -> Result<Vec<Article>, AppError>;

    /// Finds an article by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError>;

    /// Inserts an article and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if `authorid` does not reference a user
    /// or on any other database error.
    async fn create(&self, new_article: NewArticle) -> Result<Article, AppError>;

    /// Applies a partial update. An empty patch is a no-op.
    async fn update(&self, id: i64, patch: ArticlePatch) -> Result<(), AppError>;

    /// Removes an article together with its comments.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
