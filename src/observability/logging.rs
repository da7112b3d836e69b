//! Structured logging.
//!
//! Uses the `tracing` ecosystem. `RUST_LOG` takes precedence over the
//! configured level so operators can raise verbosity without editing the
//! config file.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a configured level.
pub fn default_directive(level: &str) -> String {
    format!("gbhs_gate={level},tower_http={level}")
}

/// Initialize the global tracing subscriber.
pub fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
