//! Access gate middleware.
//! Sends visitors without a token from protected pages to the login page.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::{debug, info};

use crate::http::request::request_id_of;
use crate::http::response::redirect_response;
use crate::observability::metrics;
use crate::security::{AccessGate, GateOutcome};

pub async fn access_gate_middleware(
    State(gate): State<Arc<AccessGate>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path();

    // Static assets never reach the gate.
    if gate.is_excluded(path) {
        return next.run(req).await;
    }

    let class = gate.classify(path);
    let outcome = gate.check(&req);
    metrics::record_gate_decision(class, &outcome);

    match outcome {
        GateOutcome::Continue => {
            debug!(
                request_id = %request_id_of(&req),
                path = %path,
                class = %class,
                "Gate passed request"
            );
            next.run(req).await
        }
        GateOutcome::Redirect(target) => {
            info!(
                request_id = %request_id_of(&req),
                path = %path,
                location = %target,
                "No token for protected route, redirecting to login"
            );
            redirect_response(&target)
        }
    }
}
