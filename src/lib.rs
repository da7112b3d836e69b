//! GBHS Bafia website access gate.
//!
//! Intercepts requests in front of the school website, lets public pages,
//! static assets and API calls through, and sends visitors without a token
//! from protected pages to `/auth?mode=login&redirect=<path>`.

pub mod config;
pub mod http;
pub mod landing;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod security;

pub use config::schema::GateServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use security::{AccessGate, GateOutcome};
