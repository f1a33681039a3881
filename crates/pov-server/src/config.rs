//! Server configuration.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `POV_*` environment variables.

use std::net::SocketAddr;

use pov_core::gate::AccessSecret;

/// Default listen address when neither `POV_BIND_ADDR` nor `PORT` is set.
const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 8300);

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Shared secret that unlocks the calculator.
    pub access_secret: AccessSecret,
    /// Whether to mount the `/v1` JSON API next to the page.
    pub enable_api: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND),
            log_level: "info".to_owned(),
            access_secret: AccessSecret::default(),
            enable_api: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT`: port to bind on (binds to `0.0.0.0`)
    /// - `POV_BIND_ADDR`: full bind address (overrides `PORT`, default: `127.0.0.1:8300`)
    /// - `POV_LOG_LEVEL`: log filter (default: `info`)
    /// - `POV_ACCESS_SECRET`: calculator password (default: the built-in placeholder)
    /// - `POV_ENABLE_API`: mount the JSON API (default: `true`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Priority: POV_BIND_ADDR > PORT > default
        let bind_addr = if let Some(addr) = lookup("POV_BIND_ADDR") {
            addr.parse().unwrap_or(defaults.bind_addr)
        } else if let Some(port_str) = lookup("PORT") {
            let port: u16 = port_str.parse().unwrap_or(DEFAULT_BIND.1);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            defaults.bind_addr
        };

        let log_level = lookup("POV_LOG_LEVEL").unwrap_or(defaults.log_level);

        let access_secret = lookup("POV_ACCESS_SECRET")
            .filter(|s| !s.is_empty())
            .map_or(defaults.access_secret, AccessSecret::new);

        let enable_api = lookup("POV_ENABLE_API")
            .map_or(defaults.enable_api, |v| v != "false" && v != "0");

        Self {
            bind_addr,
            log_level,
            access_secret,
            enable_api,
        }
    }
}
