//! Per-resource services for the application layer.

pub mod article_service;
pub mod comment_service;
pub mod user_service;

pub use article_service::ArticleService;
pub use comment_service::CommentService;
pub use user_service::UserService;
