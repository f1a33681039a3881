//! HTTP error types for the Proof of Value server.
//!
//! Maps domain errors from `pov-core` into appropriate HTTP responses.
//! Every error variant produces a JSON body with a machine-readable `error`
//! field and a human-readable `message`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use pov_core::error::{CalcError, PageError};

/// Application-level error returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Access value missing or wrong.
    #[error("{0}")]
    Unauthorized(String),
    /// Input outside its declared domain.
    #[error("{0}")]
    InvalidInput(String),
    /// Requested resource not found.
    #[error("{0}")]
    NotFound(String),
    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
            Self::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "invalid_input", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorBody {
            error: error_type,
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CalcError> for AppError {
    fn from(err: CalcError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        match err {
            PageError::Locked => Self::Unauthorized(err.to_string()),
            PageError::Calc(inner) => inner.into(),
        }
    }
}
