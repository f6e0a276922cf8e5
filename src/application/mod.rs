//! Application layer services implementing request rules.
//!
//! Services take loosely typed request bodies ([`fields::RequestFields`]),
//! apply the required/updatable field rules of each resource, and call the
//! injected repository. HTTP handlers stay thin.
//!
//! # Available Services
//!
//! - [`services::UserService`]
//! - [`services::ArticleService`]
//! - [`services::CommentService`]

pub mod fields;
pub mod services;
