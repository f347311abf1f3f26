//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::knowledge::KnowledgeError;

/// Errors returned by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

/// Standard API error response body.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl From<KnowledgeError> for ApiError {
    fn from(err: KnowledgeError) -> Self {
        match err {
            KnowledgeError::UnknownFolder(_) => Self::NotFound(err.to_string()),
            KnowledgeError::DuplicateFolder(_) | KnowledgeError::DuplicateFile(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Internal(message) => {
                tracing::error!(error = %message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            error,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
