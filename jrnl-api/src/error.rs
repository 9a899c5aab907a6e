//! Error types for jrnl-api

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jrnl_common::Error;
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request (400) detected in the HTTP layer
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Request body or query string failed to deserialize
    #[error("Malformed request: {message}")]
    Rejected { status: StatusCode, message: String },

    /// Error raised by the journal services
    #[error(transparent)]
    Journal(#[from] Error),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Rejected { status, .. } => (*status, "MALFORMED_REQUEST"),
            ApiError::Journal(err) => match err {
                Error::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT"),
                Error::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                Error::MultipleEntries { .. } => (StatusCode::CONFLICT, "MULTIPLE_ENTRIES"),
                Error::RemoteApi { .. } => (StatusCode::BAD_GATEWAY, "REMOTE_API_ERROR"),
                Error::Transport(_) => (StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR"),
                Error::Parse(_) => (StatusCode::BAD_GATEWAY, "PARSE_ERROR"),
                Error::Config(_) | Error::Io(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.parts();
        if status.is_server_error() {
            tracing::error!(code = error_code, "{}", self);
        }

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
