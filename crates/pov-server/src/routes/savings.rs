//! Savings computation route: `/v1/savings`
//!
//! Runs behind the access middleware. Inputs are validated by the core
//! calculator; out-of-domain values come back as `400 invalid_input`.

use std::sync::Arc;

use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use pov_core::calculator::{self, SavingsReport};
use pov_core::category::CATEGORIES;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/v1/savings` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(compute))
}

#[derive(Debug, Deserialize)]
pub struct SavingsRequest {
    pub revenue: f64,
    pub op_ex_percent: f64,
}

/// `POST /v1/savings`
async fn compute(Json(body): Json<SavingsRequest>) -> Result<Json<SavingsReport>, AppError> {
    let report = calculator::compute_savings(body.revenue, body.op_ex_percent, &CATEGORIES)?;
    debug!(
        revenue = body.revenue,
        op_ex_percent = body.op_ex_percent,
        total_savings = report.totals.total_savings,
        "savings computed"
    );
    Ok(Json(report))
}
