//! Comment management service.

use std::sync::Arc;

use crate::application::fields::RequestFields;
use crate::domain::entities::{Comment, CommentPatch, NewComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

/// Validates comment requests and forwards them to the repository.
pub struct CommentService {
    repository: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_comments(&self) -> Result<Vec<Comment>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a comment by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (`Comment doesn't exist`) if there is no such row.
    pub async fn get_comment(&self, id: i64) -> Result<Comment, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Comment::SCHEMA.not_found())
    }

    /// Creates a comment from a request body.
    ///
    /// `content`, `articleid` and `commentorid` must be present, checked in
    /// that order.
    pub async fn create_comment(&self, mut fields: RequestFields) -> Result<Comment, AppError> {
        fields.require(Comment::SCHEMA.required)?;

        let new_comment = NewComment {
            content: fields.take("content")?,
            articleid: fields.take("articleid")?,
            commentorid: fields.take("commentorid")?,
        };

        let comment = self.repository.create(new_comment).await?;
        tracing::info!(
            comment_id = comment.id,
            article_id = comment.articleid,
            "Comment created"
        );

        Ok(comment)
    }

    /// Replaces the text of an existing comment. Other fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comment does not exist.
    /// Returns [`AppError::Validation`] if `content` is not supplied.
    pub async fn update_comment(&self, id: i64, mut fields: RequestFields) -> Result<(), AppError> {
        self.get_comment(id).await?;

        fields.retain(Comment::SCHEMA.updatable);
        if fields.is_empty() {
            return Err(Comment::SCHEMA.nothing_to_update());
        }

        let patch = CommentPatch {
            content: fields.take_optional("content")?,
        };

        self.repository.update(id, patch).await?;
        tracing::info!(comment_id = id, "Comment updated");

        Ok(())
    }

    pub async fn delete_comment(&self, id: i64) -> Result<(), AppError> {
        self.get_comment(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(comment_id = id, "Comment deleted");

        Ok(())
    }
}
