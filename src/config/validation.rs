//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges
//! - Check that gate prefixes are absolute paths
//! - Reject rule sets that would redirect the login page to itself
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GateServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use std::str::FromStr;

use axum::http::uri::Authority;

use crate::config::schema::GateServerConfig;
use crate::routing::matcher::{Matcher, PublicRouteMatcher};

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid {field} address '{value}'")]
    InvalidAddress { field: &'static str, value: String },
    #[error("{field} entry '{value}' must start with '/'")]
    RelativePath { field: &'static str, value: String },
    #[error("auth path '{0}' is not covered by any public route")]
    AuthPathNotPublic(String),
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &GateServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if Authority::from_str(&config.upstream.address).is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "upstream.address",
            value: config.upstream.address.clone(),
        });
    }
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    let gate = &config.gate;
    for route in &gate.public_routes {
        check_absolute(&mut errors, "gate.public_routes", route);
    }
    for prefix in &gate.excluded_prefixes {
        check_absolute(&mut errors, "gate.excluded_prefixes", prefix);
    }
    check_absolute(&mut errors, "gate.api_prefix", &gate.api_prefix);
    check_absolute(&mut errors, "gate.auth_path", &gate.auth_path);

    if !PublicRouteMatcher::new(gate.public_routes.clone()).matches(&gate.auth_path) {
        errors.push(ValidationError::AuthPathNotPublic(gate.auth_path.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }
    if config.upstream.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.connect_timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_absolute(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if !value.starts_with('/') {
        errors.push(ValidationError::RelativePath {
            field,
            value: value.to_string(),
        });
    }
}
