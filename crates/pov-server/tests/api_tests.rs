//! Integration tests for the Proof of Value HTTP surface.
//!
//! These drive the full router in-process with `tower::ServiceExt::oneshot`,
//! so no listener or port is needed.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use pov_core::gate::AccessSecret;
use pov_server::config::ServerConfig;
use pov_server::routes::build_router;
use pov_server::state::AppState;

const SECRET: &str = "AAXIS2.0";

fn app() -> Router {
    app_with(ServerConfig::default())
}

fn app_with(config: ServerConfig) -> Router {
    build_router(Arc::new(AppState::new(&config)), config.enable_api)
}

/// Helper: send one request and return (status, body text).
async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn json_post(uri: &str, body: &Value, access: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(access) = access {
        builder = builder.header("x-pov-access", access);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

// ── System ───────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_ok_with_hardening_headers() {
    let resp = app().oneshot(get("/v1/sys/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(resp.headers()[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(resp.headers()[header::CACHE_CONTROL], "no-store");

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

// ── Gate ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn gate_unlock_json() {
    let (status, body) = send(app(), json_post("/v1/gate/unlock", &json!({"password": SECRET}), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"granted": true}));

    let (status, body) = send(app(), json_post("/v1/gate/unlock", &json!({"password": "wrong"}), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"granted": false}));
}

#[tokio::test]
async fn configured_secret_replaces_default() {
    let config = ServerConfig {
        access_secret: AccessSecret::new("rotated"),
        ..ServerConfig::default()
    };
    let (_, body) = send(app_with(config.clone()), json_post("/v1/gate/unlock", &json!({"password": SECRET}), None)).await;
    assert!(body.contains("false"));

    let (_, body) = send(app_with(config), json_post("/v1/gate/unlock", &json!({"password": "rotated"}), None)).await;
    assert!(body.contains("true"));
}

// ── Catalog ──────────────────────────────────────────────────────────

#[tokio::test]
async fn categories_are_listed_in_order() {
    let (status, body) = send(app(), get("/v1/categories")).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    let cats = body["categories"].as_array().unwrap();
    assert_eq!(cats.len(), 7);
    assert_eq!(cats[0]["name"], "Inventory Carrying / Holding Cost");
    assert_eq!(cats[6]["id"], 6);
    assert_eq!(cats[1]["range"]["high"], 0.22);
}

#[tokio::test]
async fn problems_lookup_and_fallback() {
    let (status, body) = send(app(), get("/v1/problems/1")).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["problems"][0], "Route Optimization");

    let (_, a) = send(app(), get("/v1/problems/4")).await;
    let (_, b) = send(app(), get("/v1/problems/6")).await;
    let a: Value = serde_json::from_str(&a).unwrap();
    let b: Value = serde_json::from_str(&b).unwrap();
    assert_eq!(a["problems"], b["problems"]);
    assert_eq!(a["problems"][0], "Process Automation");

    let (status, body) = send(app(), get("/v1/problems/7")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("not_found"));
}

// ── Savings ──────────────────────────────────────────────────────────

#[tokio::test]
async fn savings_requires_access_header() {
    let payload = json!({"revenue": 5.2e9, "op_ex_percent": 20.0});

    let (status, body) = send(app(), json_post("/v1/savings", &payload, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.contains("unauthorized"));

    let (status, _) = send(app(), json_post("/v1/savings", &payload, Some("wrong"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn savings_baseline_figures() {
    let payload = json!({"revenue": 5.2e9, "op_ex_percent": 20.0});
    let (status, body) = send(app(), json_post("/v1/savings", &payload, Some(SECRET))).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    let opex = body["total_operating_expense"].as_f64().unwrap();
    assert!((opex - 1.04e9).abs() < 1.0);

    let inventory = &body["categories"][0];
    assert!((inventory["spend"].as_f64().unwrap() - 124_800_000.0).abs() < 1e-3);
    assert!((inventory["savings"].as_f64().unwrap() - 18_720_000.0).abs() < 1e-3);

    let sum: f64 = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["savings"].as_f64().unwrap())
        .sum();
    let total = body["totals"]["total_savings"].as_f64().unwrap();
    assert!((sum - total).abs() < 1e-3);
}

#[tokio::test]
async fn savings_rejects_out_of_domain_input() {
    let payload = json!({"revenue": 1.0e8, "op_ex_percent": 20.0});
    let (status, body) = send(app(), json_post("/v1/savings", &payload, Some(SECRET))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["error"], "invalid_input");
    assert!(body["message"].as_str().unwrap().contains("revenue"));

    let payload = json!({"revenue": 5.2e9, "op_ex_percent": 51});
    let (status, _) = send(app(), json_post("/v1/savings", &payload, Some(SECRET))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn api_can_be_disabled() {
    let config = ServerConfig {
        enable_api: false,
        ..ServerConfig::default()
    };
    let (status, _) = send(app_with(config.clone()), get("/v1/categories")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(app_with(config), get("/")).await;
    assert_eq!(status, StatusCode::OK);
}

// ── Page ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn landing_shows_password_gate() {
    let (status, body) = send(app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("action=\"/unlock\""));
    assert!(!body.contains("Annual Revenue"));
}

#[tokio::test]
async fn wrong_password_shows_inline_error() {
    let (status, body) = send(app(), form_post("/unlock", "password=wrong")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Incorrect password"));
    assert!(!body.contains("Annual Revenue"));
}

#[tokio::test]
async fn correct_password_renders_calculator() {
    let (status, body) = send(app(), form_post("/unlock", "password=AAXIS2.0")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Annual Revenue"));
    assert!(body.contains("$18,720,000"));
    assert!(body.contains("Demand Forecasting"));
}

#[tokio::test]
async fn calculator_applies_inputs_and_selection() {
    let form = "access=AAXIS2.0&revenue=500000000&op_ex_percent=5&current_category=0&category=1";
    let (status, body) = send(app(), form_post("/calculator", form)).await;
    assert_eq!(status, StatusCode::OK);
    // 500M x 5% x 12% x 15% for the inventory row.
    assert!(body.contains("$450,000"));
    assert!(body.contains("Route Optimization"));
    assert!(!body.contains("Demand Forecasting"));
}

#[tokio::test]
async fn calculator_without_access_falls_back_to_gate() {
    let form = "access=nope&revenue=500000000&op_ex_percent=5";
    let (status, body) = send(app(), form_post("/calculator", form)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("action=\"/unlock\""));
    assert!(!body.contains("Annual Revenue"));
}

#[tokio::test]
async fn calculator_reports_out_of_domain_inline() {
    let form = "access=AAXIS2.0&revenue=99&op_ex_percent=20&current_category=0";
    let (status, body) = send(app(), form_post("/calculator", form)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("class=\"error\">invalid input: revenue"));
    assert!(body.contains("$5.2B"));
}

#[tokio::test]
async fn calculator_reports_blank_field_inline() {
    let form = "access=AAXIS2.0&revenue=&op_ex_percent=20&current_category=0";
    let (status, body) = send(app(), form_post("/calculator", form)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("class=\"error\">invalid input: revenue"));
    assert!(body.contains("Annual Revenue"));
    assert!(body.contains("$5.2B"));

    let form = "access=AAXIS2.0&revenue=abc&op_ex_percent=20&category=";
    let (status, body) = send(app(), form_post("/calculator", form)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("class=\"error\">invalid input: revenue"));
}

#[tokio::test]
async fn calculator_without_access_field_shows_clean_gate() {
    let (status, body) = send(app(), form_post("/calculator", "revenue=5200000000")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("action=\"/unlock\""));
    assert!(!body.contains("Incorrect password"));
}

#[tokio::test]
async fn revenue_label_rounds_halves_up() {
    let form = "access=AAXIS2.0&revenue=5250000000&op_ex_percent=20&current_category=0";
    let (_, body) = send(app(), form_post("/calculator", form)).await;
    assert!(body.contains("<strong>$5.3B</strong>"));
}

#[tokio::test]
async fn logo_is_served_as_svg() {
    let resp = app().oneshot(get("/logo.svg")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/svg+xml");
}
