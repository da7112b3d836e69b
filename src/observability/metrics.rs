//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gate_decisions_total` (counter): gate outcomes by route class
//! - `gate_upstream_requests_total` (counter): forwarded requests by status
//! - `gate_upstream_request_duration_seconds` (histogram): upstream latency
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Recording is a no-op until a recorder is installed, so tests and the
//!   CLI need no setup

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::routing::RouteClass;
use crate::security::GateOutcome;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record a gate decision.
pub fn record_gate_decision(class: RouteClass, outcome: &GateOutcome) {
    ::metrics::counter!(
        "gate_decisions_total",
        "class" => class.as_str(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

/// Record a request forwarded upstream.
pub fn record_upstream_request(method: &str, status: u16, start: Instant) {
    ::metrics::counter!(
        "gate_upstream_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("gate_upstream_request_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}
