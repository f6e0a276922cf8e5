//! Application error type and its HTTP representation.
//!
//! Every error is rendered as
//!
//! ```json
//! { "error": { "message": "..." } }
//! ```
//!
//! Client errors (400, 404, 413) always carry their message. Server errors (500)
//! carry the generic `"server error"` message; the underlying detail travels
//! with the response as an [`ErrorDetail`] extension so that
//! [`crate::api::middleware::error_details`] can reveal it when the service is
//! not running in hardened mode.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Message returned for every 500 response in hardened mode.
pub const HARDENED_MESSAGE: &str = "server error";

/// JSON error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorInfo {
                message: message.into(),
            },
        }
    }
}

/// Detail of a server-side failure, attached to 500 responses.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request rejected before any mutation.
    #[error("{0}")]
    Validation(String),

    /// The addressed row does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request body exceeds the body limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// `Missing '<field>' in request body`
    pub fn missing_field(field: &str) -> Self {
        Self::bad_request(format!("Missing '{field}' in request body"))
    }

    /// `Invalid '<field>' in request body`
    pub fn invalid_field(field: &str) -> Self {
        Self::bad_request(format!("Invalid '{field}' in request body"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Validation(message)
            | AppError::NotFound(message)
            | AppError::PayloadTooLarge(message) => {
                (status, Json(ErrorBody::new(message))).into_response()
            }
            err => {
                let detail = err.to_string();
                tracing::error!(error = %detail, "Request failed");

                let mut response = (status, Json(ErrorBody::new(HARDENED_MESSAGE))).into_response();
                response.extensions_mut().insert(ErrorDetail(detail));
                response
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = AppError::missing_field("title");
        assert_eq!(err.to_string(), "Missing 'title' in request body");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_status() {
        let err = AppError::not_found("User doesn't exist");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_client_error_has_no_detail_extension() {
        let response = AppError::bad_request("nope").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.extensions().get::<ErrorDetail>().is_none());
    }

    #[test]
    fn test_server_error_hides_detail_in_body() {
        let response = AppError::internal("connection refused").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let detail = response.extensions().get::<ErrorDetail>().unwrap();
        assert_eq!(detail.0, "connection refused");
    }

    #[test]
    fn test_payload_too_large_keeps_message() {
        let response = AppError::PayloadTooLarge("length limit exceeded".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(response.extensions().get::<ErrorDetail>().is_none());
    }

    #[test]
    fn test_sqlx_error_maps_to_500() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
