//! Request body extraction.
//!
//! Bodies are read as raw bytes and parsed into [`RequestFields`] so that
//! field-level validation, not the JSON extractor, decides the response.
//! An empty body reads as `{}`.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde_json::Value;

use crate::application::fields::RequestFields;
use crate::error::AppError;

/// Extractor yielding the request body as a JSON object.
///
/// # Errors
///
/// Rejects with 400 `Request body must be a JSON object` when the body is
/// neither empty nor a JSON object, and with 413 when it is over the body
/// limit (2 MB by default).
#[derive(Debug)]
pub struct JsonFields(pub RequestFields);

impl<S> FromRequest<S> for JsonFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
                _ => AppError::bad_request(rejection.body_text()),
            })?;

        parse_fields(&bytes).map(Self)
    }
}

/// Parses a raw body into request fields.
pub fn parse_fields(bytes: &[u8]) -> Result<RequestFields, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(RequestFields::default());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map.into()),
        _ => Err(AppError::bad_request("Request body must be a JSON object")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_empty_object() {
        assert!(parse_fields(b"").unwrap().is_empty());
        assert!(parse_fields(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn test_object_body() {
        let fields = parse_fields(br#"{"title":"t"}"#).unwrap();
        assert!(fields.has("title"));
    }

    #[test]
    fn test_non_object_body_rejected() {
        let bodies: [&[u8]; 3] = [b"[1,2]", b"\"text\"", b"{not json"];
        for body in bodies {
            let err = parse_fields(body).unwrap_err();
            assert_eq!(err.to_string(), "Request body must be a JSON object");
        }
    }
}
