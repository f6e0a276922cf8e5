//! Error detail policy for server errors.

use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{ErrorBody, ErrorDetail};
use crate::state::AppState;

/// Reveals the detail of 500 responses unless the service is hardened.
///
/// [`AppError`](crate::error::AppError) renders every server error as
/// `{"error":{"message":"server error"}}` and attaches the real message as an
/// [`ErrorDetail`] extension. With `expose_error_details` on, this layer
/// swaps the body for `{"error":{"message":"<detail>"}}`, keeping the status.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", resource_routes())
///     .layer(middleware::from_fn_with_state(state.clone(), error_details::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    if !st.expose_error_details {
        return response;
    }

    match response.extensions_mut().remove::<ErrorDetail>() {
        Some(ErrorDetail(detail)) => {
            let status = response.status();
            (status, Json(ErrorBody::new(detail))).into_response()
        }
        None => response,
    }
}
