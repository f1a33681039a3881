//! HTTP route handlers.
//!
//! Routes are organized by concern:
//! - `sys`: health check
//! - `gate`: JSON password check
//! - `catalog`: static categories and problem lists
//! - `savings`: the savings computation (requires `X-Pov-Access`)
//! - `ui`: the server-rendered calculator page and logo

pub mod catalog;
pub mod gate;
pub mod savings;
pub mod sys;
pub mod ui;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::middleware as axum_mw;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::access_middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
///
/// The `/v1` JSON API is only mounted when `enable_api` is set; the page,
/// logo and health check are always served.
pub fn build_router(state: Arc<AppState>, enable_api: bool) -> Router {
    let mut app = Router::new()
        .merge(ui::router())
        .nest("/v1/sys", sys::router());

    if enable_api {
        let gated = Router::new()
            .nest("/v1/savings", savings::router())
            .route_layer(axum_mw::from_fn_with_state(
                Arc::clone(&state),
                access_middleware,
            ));

        app = app
            .nest("/v1/gate", gate::router())
            .merge(catalog::router())
            .merge(gated);
    }

    app.layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .with_state(state)
}
