//! Article management service.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::fields::RequestFields;
use crate::domain::entities::{Article, ArticlePatch, NewArticle};
use crate::domain::repositories::ArticleRepository;
use crate::error::AppError;

/// Validates article requests and forwards them to the repository.
pub struct ArticleService {
    repository: Arc<dyn ArticleRepository>,
}

impl ArticleService {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    /// Lists all articles ordered by id.
    pub async fn list_articles(&self) -> Result<Vec<Article>, AppError> {
        self.repository.list().await
    }

    /// Retrieves an article by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (`Article doesn't exist`) if there is no such row.
    pub async fn get_article(&self, id: i64) -> Result<Article, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| Article::SCHEMA.not_found())
    }

    /// Creates an article from a request body.
    ///
    /// # Validation
    ///
    /// `title`, `content`, `modified` and `authorid` must be present, checked
    /// in that order. `modified` must be an RFC 3339 timestamp. Whether
    /// `authorid` names a real user is left to the foreign key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a missing or mistyped field.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn create_article(&self, mut fields: RequestFields) -> Result<Article, AppError> {
        fields.require(Article::SCHEMA.required)?;

        let new_article = NewArticle {
            title: fields.take("title")?,
            content: fields.take("content")?,
            modified: fields.take::<DateTime<Utc>>("modified")?,
            authorid: fields.take("authorid")?,
        };

        let article = self.repository.create(new_article).await?;
        tracing::info!(article_id = article.id, author_id = article.authorid, "Article created");

        Ok(article)
    }

    /// Applies a partial update to an existing article.
    ///
    /// Only `title`, `modified` and `content` are applied; anything else,
    /// `authorid` included, is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Validation`] if no updatable field remains.
    pub async fn update_article(&self, id: i64, mut fields: RequestFields) -> Result<(), AppError> {
        self.get_article(id).await?;

        fields.retain(Article::SCHEMA.updatable);
        if fields.is_empty() {
            return Err(Article::SCHEMA.nothing_to_update());
        }

        let patch = ArticlePatch {
            title: fields.take_optional("title")?,
            content: fields.take_optional("content")?,
            modified: fields.take_optional("modified")?,
        };

        self.repository.update(id, patch).await?;
        tracing::info!(article_id = id, "Article updated");

        Ok(())
    }

    /// Deletes an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    pub async fn delete_article(&self, id: i64) -> Result<(), AppError> {
        self.get_article(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(article_id = id, "Article deleted");

        Ok(())
    }
}
