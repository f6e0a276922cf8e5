//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resource::ResourceSchema;

/// A stored user row.
///
/// `password` is stored and returned exactly as supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub writer: bool,
    pub admin: bool,
    pub password: String,
    pub date_created: DateTime<Utc>,
}

impl User {
    pub const SCHEMA: ResourceSchema = ResourceSchema {
        name: "User",
        path: "users",
        required: &["name", "writer", "admin", "password"],
        updatable: &["name", "admin", "writer", "password"],
        update_hint: "Request body must contain one of: 'name', 'admin', 'writer', or 'password'",
    };
}

/// Input data for creating a user. `id` and `date_created` are assigned by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub writer: bool,
    pub admin: bool,
    pub password: String,
}

/// Partial update for an existing user.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub writer: Option<bool>,
    pub admin: Option<bool>,
    pub password: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.writer.is_none() && self.admin.is_none() && self.password.is_none()
    }
}
