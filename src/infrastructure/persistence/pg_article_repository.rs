//! PostgreSQL implementation of the article repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Article, ArticlePatch, NewArticle};
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `articles` table.
///
/// The `authorid` foreign key is enforced by the database.
pub struct PgArticleRepository {
    pool: Arc<PgPool>,
}

impl PgArticleRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn list(&self) -> Result<Vec<Article>, AppError> {
        let articles = sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, content, modified, authorid
            FROM articles
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(articles)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError> {
        let article = sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, content, modified, authorid
            FROM articles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(article)
    }

    async fn create(&self, new_article: NewArticle) -> Result<Article, AppError> {
        let article = sqlx::query_as::<_, Article>(
            r#"
            INSERT INTO articles (title, content, modified, authorid)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, modified, authorid
            "#,
        )
        .bind(new_article.title)
        .bind(new_article.content)
        .bind(new_article.modified)
        .bind(new_article.authorid)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(article)
    }

    async fn update(&self, id: i64, patch: ArticlePatch) -> Result<(), AppError> {
        if patch.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            UPDATE articles SET
                title    = COALESCE($2::TEXT, title),
                content  = COALESCE($3::TEXT, content),
                modified = COALESCE($4::TIMESTAMPTZ, modified)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(patch.modified)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
