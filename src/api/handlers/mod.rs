//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod articles;
pub mod comments;
pub mod root;
pub mod users;

pub use articles::{
    create_article_handler, delete_article_handler, get_article_handler, list_articles_handler,
    update_article_handler,
};
pub use comments::{
    create_comment_handler, delete_comment_handler, get_comment_handler, list_comments_handler,
    update_comment_handler,
};
pub use root::root_handler;
pub use users::{create_user_handler, get_user_handler, list_users_handler, update_user_handler};
