//! Proof of Value HTTP server.
//!
//! Wires the core calculator into a running Axum server. Serves the gated
//! calculator page at `/` and, unless disabled, the JSON API at `/v1/*`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod state;
