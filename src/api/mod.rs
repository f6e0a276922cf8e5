//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`body`] - Lenient JSON object extraction
//! - [`handlers`] - HTTP request handlers, one module per resource
//! - [`middleware`] - Tracing, CORS, security headers and error detail policy
//! - [`routes`] - Route configuration

pub mod body;
pub mod handlers;
pub mod middleware;
pub mod routes;
