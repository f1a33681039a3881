//! Calculator page routes.
//!
//! Serves the gated page at `/`, handles the password form at `/unlock`,
//! re-renders on every input change at `/calculator`, and serves the logo.
//! Each request rebuilds the page state from the submitted form; nothing is
//! kept between requests.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tracing::{info, warn};

use pov_core::calculator::CalculatorState;
use pov_core::error::PageError;
use pov_core::page::{PageState, PageView};

use crate::error::AppError;
use crate::render::{self, RenderContext};
use crate::state::AppState;

/// Build the UI router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(gate_page))
        .route("/unlock", post(unlock))
        .route("/calculator", post(calculator))
        .route("/logo.svg", get(logo))
}

// ── Form types ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UnlockForm {
    pub password: String,
}

/// Fields posted by the calculator form. A category button sends
/// `category`; slider changes only carry `current_category`.
///
/// Values are kept as text so a blank or malformed field reaches
/// [`apply_inputs`] and is reported inline instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct CalculatorForm {
    #[serde(default)]
    pub access: String,
    pub revenue: Option<String>,
    pub op_ex_percent: Option<String>,
    pub category: Option<String>,
    pub current_category: Option<String>,
}

// ── Handlers ─────────────────────────────────────────────────────────

async fn gate_page() -> Result<Html<String>, AppError> {
    let view = PageState::new().view()?;
    Ok(Html(render::page(&view, &RenderContext::default())))
}

async fn unlock(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UnlockForm>,
) -> Result<Html<String>, AppError> {
    let mut page = PageState::new();
    let outcome = page.submit_password(&state.access_secret, &form.password);
    if outcome.granted {
        info!("calculator page unlocked");
    }

    let ctx = RenderContext {
        access: if outcome.granted { form.password.as_str() } else { "" },
        input_error: None,
    };
    Ok(Html(render::page(&page.view()?, &ctx)))
}

async fn calculator(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CalculatorForm>,
) -> Result<Html<String>, AppError> {
    let mut page = PageState::resume(&state.access_secret, &form.access, CalculatorState::default());
    if !page.gate().is_unlocked() {
        warn!("calculator form posted with wrong access value");
        return Ok(Html(render::page(&page.view()?, &RenderContext::default())));
    }

    let input_error = apply_inputs(&mut page, &form).err().map(|e| e.to_string());
    if let Some(ref msg) = input_error {
        warn!(error = %msg, "calculator input rejected");
    }

    let view: PageView = page.view()?;
    let ctx = RenderContext {
        access: &form.access,
        input_error,
    };
    Ok(Html(render::page(&view, &ctx)))
}

/// Apply the posted inputs in order, stopping at the first rejected one.
/// Fields already applied stay applied.
fn apply_inputs(page: &mut PageState, form: &CalculatorForm) -> Result<(), PageError> {
    if let Some(revenue) = form.revenue.as_deref() {
        page.set_revenue(parse_number(revenue))?;
    }
    if let Some(pct) = form.op_ex_percent.as_deref() {
        page.set_op_ex_percent(parse_number(pct))?;
    }
    let index = parse_index(form.category.as_deref())
        .or_else(|| parse_index(form.current_category.as_deref()));
    if let Some(index) = index {
        page.select_category(index)?;
    }
    Ok(())
}

/// Unparsable text becomes NaN, which the domain check rejects.
fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// A blank or malformed category keeps the current selection.
fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|v| v.trim().parse().ok())
}

async fn logo() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], LOGO_SVG)
}

/// Decorative logo: a lettermark tile followed by the wordmark.
const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 140 32" width="140" height="32">
<rect width="32" height="32" rx="4" fill="#ffffff"/>
<text x="16" y="23" text-anchor="middle" font-family="Arial,sans-serif" font-weight="700" font-size="20" fill="#0B1120">A</text>
<text x="42" y="23" font-family="Arial,sans-serif" font-weight="700" font-size="20" letter-spacing="3" fill="#ffffff">AAXIS</text>
</svg>
"##;
