//! Article entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resource::ResourceSchema;

/// A stored article row. `authorid` references `users.id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub modified: DateTime<Utc>,
    pub authorid: i64,
}

impl Article {
    pub const SCHEMA: ResourceSchema = ResourceSchema {
        name: "Article",
        path: "articles",
        required: &["title", "content", "modified", "authorid"],
        updatable: &["title", "modified", "content"],
        update_hint: "Request body must contain one of: 'title', 'modified' or 'content'",
    };
}

/// Input data for creating an article. `modified` is supplied by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub modified: DateTime<Utc>,
    pub authorid: i64,
}

/// Partial update for an existing article. The author cannot be changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub modified: Option<DateTime<Utc>>,
}

impl ArticlePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.modified.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_article_round_trips_modified_as_rfc3339() {
        let article = Article {
            id: 2,
            title: "old".to_string(),
            content: "body".to_string(),
            modified: Utc.with_ymd_and_hms(2018, 3, 3, 0, 0, 0).unwrap(),
            authorid: 1,
        };

        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["modified"], "2018-03-03T00:00:00Z");

        let back: Article = serde_json::from_value(value).unwrap();
        assert_eq!(back, article);
    }

    #[test]
    fn test_schema_keeps_author_out_of_updates() {
        assert!(Article::SCHEMA.required.contains(&"authorid"));
        assert!(!Article::SCHEMA.updatable.contains(&"authorid"));
    }
}
