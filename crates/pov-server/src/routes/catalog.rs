//! Static catalog routes: `/v1/categories`, `/v1/problems/{id}`

use std::sync::Arc;

use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use pov_core::category::{self, CATEGORIES, ExpenseCategory};
use pov_core::problems;

use crate::error::AppError;
use crate::state::AppState;

/// Build the catalog router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/categories", get(list_categories))
        .route("/v1/problems/{id}", get(problems_for))
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: &'static [ExpenseCategory],
}

#[derive(Debug, Serialize)]
pub struct ProblemListResponse {
    pub category_id: usize,
    pub category: &'static str,
    pub problems: &'static [&'static str],
}

// ── Handlers ─────────────────────────────────────────────────────────

async fn list_categories() -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        categories: &CATEGORIES,
    })
}

/// Problem list for a known category. The lookup itself is total, but ids
/// that name no category are a client mistake.
async fn problems_for(Path(id): Path<usize>) -> Result<Json<ProblemListResponse>, AppError> {
    let cat = category::get(id)
        .ok_or_else(|| AppError::NotFound(format!("no category with id {id}")))?;

    Ok(Json(ProblemListResponse {
        category_id: cat.id,
        category: cat.name,
        problems: problems::lookup(cat.id),
    }))
}
