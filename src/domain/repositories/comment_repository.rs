//! Repository trait for comment data access.

use crate::domain::entities::{Comment, CommentPatch, NewComment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `comments` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Comment>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError>;

    /// Inserts a comment and returns the stored row, including `date_created`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if `articleid` or `commentorid` point at
    /// missing rows, or on any other database error.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    async fn update(&self, id: i64, patch: CommentPatch) -> Result<(), AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
