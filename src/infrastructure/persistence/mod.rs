//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Every value reaches the database through a bind parameter; partial
//! updates keep unset columns with `COALESCE`.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - `users`
//! - [`PgArticleRepository`] - `articles`
//! - [`PgCommentRepository`] - `comments`

pub mod pg_article_repository;
pub mod pg_comment_repository;
pub mod pg_user_repository;

pub use pg_article_repository::PgArticleRepository;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_user_repository::PgUserRepository;
