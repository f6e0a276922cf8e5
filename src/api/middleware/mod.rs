//! HTTP middleware for request processing.
//!
//! Provides observability, cross-origin, header and error-detail middleware.

pub mod cors;
pub mod error_details;
pub mod security_headers;
pub mod tracing;
