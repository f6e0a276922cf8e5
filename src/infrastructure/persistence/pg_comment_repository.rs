//! PostgreSQL implementation of the comment repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Comment, CommentPatch, NewComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `comments` table.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn list(&self) -> Result<Vec<Comment>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, content, articleid, commentorid, date_created
            FROM comments
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(comments)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, content, articleid, commentorid, date_created
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(comment)
    }

    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (content, articleid, commentorid, date_created)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, content, articleid, commentorid, date_created
            "#,
        )
        .bind(new_comment.content)
        .bind(new_comment.articleid)
        .bind(new_comment.commentorid)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(comment)
    }

    async fn update(&self, id: i64, patch: CommentPatch) -> Result<(), AppError> {
        let Some(content) = patch.content else {
            return Ok(());
        };

        sqlx::query("UPDATE comments SET content = $2 WHERE id = $1")
            .bind(id)
            .bind(content)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
