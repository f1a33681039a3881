//! Access middleware for the savings API.
//!
//! Checks the `X-Pov-Access` header against the configured secret before
//! letting a request through. There is no token or session: every API call
//! carries the shared secret.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the access secret on API calls.
pub const ACCESS_HEADER: &str = "x-pov-access";

/// Middleware that validates the `X-Pov-Access` header.
pub async fn access_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let access = req
        .headers()
        .get(ACCESS_HEADER)
        .and_then(|v| v.to_str().ok());

    let Some(access) = access else {
        return AppError::Unauthorized("missing X-Pov-Access header".to_owned()).into_response();
    };

    if !state.access_secret.matches(access) {
        warn!(path = %req.uri().path(), "rejected API call with wrong access value");
        return AppError::Unauthorized("invalid access value".to_owned()).into_response();
    }

    next.run(req).await
}
