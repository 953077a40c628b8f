//! Application error type mapping to HTTP status codes and the
//! `{"error": "..."}` body the form client understands.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use hashgen_types::error::HashError;
use hashgen_types::hash::ErrorBody;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Validation or generation failure from the hash service.
    Hash(HashError),
    /// The request body was not a decodable JSON object.
    InvalidBody,
    /// The route exists but not for this method.
    MethodNotAllowed,
}

impl From<HashError> for AppError {
    fn from(e: HashError) -> Self {
        AppError::Hash(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Hash(HashError::Generation(detail)) => {
                tracing::error!(%detail, "hash generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "hash generation failed".to_string(),
                )
            }
            AppError::Hash(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::InvalidBody => (StatusCode::BAD_REQUEST, "invalid JSON body".to_string()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method not allowed".to_string(),
            ),
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
