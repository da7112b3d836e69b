//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gate.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GateServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream site that receives passed-through requests.
    pub upstream: UpstreamConfig,

    /// Access gate rules.
    pub gate: GateConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream site configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Upstream address (e.g., "127.0.0.1:3000").
    pub address: String,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:3000".to_string(),
            connect_timeout_secs: 5,
        }
    }
}

/// Access gate rules.
///
/// Built once at startup and handed to [`crate::security::AccessGate::new`].
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GateConfig {
    /// Path prefixes reachable without a token. A route matches the path
    /// itself and anything below `{route}/`.
    pub public_routes: Vec<String>,

    /// Prefix of API surfaces that authorize requests themselves.
    pub api_prefix: String,

    /// Authentication entry point used as the redirect target.
    pub auth_path: String,

    /// Prefixes of static assets that bypass the gate entirely.
    pub excluded_prefixes: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            public_routes: [
                "/",
                "/about",
                "/contact",
                "/gallery",
                "/news",
                "/gbhs-history",
                "/auth",
                "/api/auth/login",
                "/api/auth/register",
                "/api/auth/logout",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            api_prefix: "/api/".to_string(),
            auth_path: "/auth".to_string(),
            excluded_prefixes: ["/_next/static", "/_next/image", "/favicon.ico", "/public/"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
