//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into HTTP responses with a `{"error": "message"}`
//! body and a matching status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use relief_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: missing or invalid input from caller.
    BadRequest(String),
    /// 404 Not Found: requested resource doesn't exist.
    NotFound(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound("not found".to_owned())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            // Malformed uploads surface as server errors, like any other
            // failure inside the ingestion batch.
            _ => Self::Internal(err.into()),
        }
    }
}
