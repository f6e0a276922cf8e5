//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern. They
//! are implemented by concrete repositories in the infrastructure layer and
//! injected into services, so tests can swap in a double.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - `users` table
//! - [`ArticleRepository`] - `articles` table
//! - [`CommentRepository`] - `comments` table
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod article_repository;
pub mod comment_repository;
pub mod user_repository;

pub use article_repository::ArticleRepository;
pub use comment_repository::CommentRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
