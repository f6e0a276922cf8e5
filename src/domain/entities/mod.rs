//! Core domain entities representing the stored rows.
//!
//! Entities are plain data structures mirroring the table columns. Each one
//! exposes a [`ResourceSchema`](crate::domain::resource::ResourceSchema) as
//! `SCHEMA` describing its required and updatable fields.
//!
//! # Entity Types
//!
//! - [`User`] - An account that can write articles and comments
//! - [`Article`] - A piece of content owned by a user
//! - [`Comment`] - A user's remark on an article
//!
//! # Design Pattern
//!
//! Separate structs are used for creation and partial updates:
//! - `NewUser`, `NewArticle`, `NewComment` - For creating new records
//! - `UserPatch`, `ArticlePatch`, `CommentPatch` - For partial updates

pub mod article;
pub mod comment;
pub mod user;

pub use article::{Article, ArticlePatch, NewArticle};
pub use comment::{Comment, CommentPatch, NewComment};
pub use user::{NewUser, User, UserPatch};
