//! Shared application state.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. It is read-only: per-page state is rebuilt from
//! each request and never stored here.

use pov_core::gate::AccessSecret;

use crate::config::ServerConfig;

/// Shared application state passed to all HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Secret that unlocks the calculator page and the savings API.
    pub access_secret: AccessSecret,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            access_secret: config.access_secret.clone(),
        }
    }
}
