//! Comment entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resource::ResourceSchema;

/// A stored comment row.
///
/// `articleid` references `articles.id`, `commentorid` references `users.id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub articleid: i64,
    pub commentorid: i64,
    pub date_created: DateTime<Utc>,
}

impl Comment {
    // Comments have no `modified` column; the hint text is part of the public
    // contract and stays as clients know it.
    pub const SCHEMA: ResourceSchema = ResourceSchema {
        name: "Comment",
        path: "comments",
        required: &["content", "articleid", "commentorid"],
        updatable: &["content"],
        update_hint: "Request body must contain one of: 'modified' or 'content'",
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub content: String,
    pub articleid: i64,
    pub commentorid: i64,
}

/// Partial update for an existing comment. Only the text can change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentPatch {
    pub content: Option<String>,
}

impl CommentPatch {
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}
