//! Access gate route: `/v1/gate/*`
//!
//! A mismatch is not an HTTP error: the response carries `granted: false`
//! and the client shows its inline message.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use pov_core::gate::{AccessGate, AuthOutcome};

use crate::state::AppState;

/// Build the `/v1/gate` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/unlock", post(unlock))
}

#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    pub password: String,
}

/// `POST /v1/gate/unlock`
async fn unlock(
    State(state): State<Arc<AppState>>,
    Json(body): Json<UnlockRequest>,
) -> Json<AuthOutcome> {
    let outcome = AccessGate::new().submit(&state.access_secret, &body.password);
    if outcome.granted {
        info!("calculator unlocked via API");
    }
    Json(outcome)
}
