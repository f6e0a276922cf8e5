//! Handler for the root greeting.

/// Fixed plain-text greeting, usable as a liveness probe.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> &'static str {
    "Hello, world!"
}
