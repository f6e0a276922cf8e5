//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`        - Plain-text greeting
//! - `/api/*`       - Resource endpoints (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, or the configured list
//! - **Security headers** - `nosniff`, frame denial, referrer policy
//! - **Error details** - Reveals 500 details unless hardened
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::root_handler;
use crate::api::middleware::{cors, error_details, security_headers, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with every route and middleware except path normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - allowed origins; empty allows any origin
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    let router = Router::new()
        .route("/", get(root_handler))
        .nest("/api", api::routes::resource_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_details::layer,
        ))
        .with_state(state);

    security_headers::apply(router)
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before routing.
pub fn app_router(state: AppState, cors_origins: &[String]) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, cors_origins))
}
