//! Request body extraction.
//!
//! Handlers validate bodies field by field, so the body is taken as a loose
//! JSON value. An empty body reads as `{}` and leaves the missing-field
//! checks to report what is absent.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::error::ApiError;

/// A request body parsed as arbitrary JSON.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Rejected {
                status: e.status(),
                message: e.body_text(),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Object(Default::default())));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    async fn extract(body: impl Into<Body>) -> Result<Value, ApiError> {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap();
        JsonBody::from_request(req, &()).await.map(|b| b.0)
    }

    #[tokio::test]
    async fn test_empty_body_is_empty_object() {
        assert_eq!(extract("").await.unwrap(), serde_json::json!({}));
        assert_eq!(extract("  \n").await.unwrap(), serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_parses_json() {
        let value = extract(r#"{"name": "Work"}"#).await.unwrap();
        assert_eq!(value["name"], "Work");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let err = extract("{name:").await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_body_is_payload_too_large() {
        let huge = format!(r#"{{"title": "{}"}}"#, "x".repeat(3 * 1024 * 1024));
        let err = extract(huge).await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::PAYLOAD_TOO_LARGE);
    }
}
