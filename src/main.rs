//! GBHS access gate (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                 ACCESS GATE                  │
//!                  │                                              │
//!   Client Request │  ┌──────────┐   ┌───────────┐   ┌─────────┐  │
//!   ───────────────┼─▶│ request  │──▶│ exclusion │──▶│  gate   │──┼──▶ Upstream
//!                  │  │   id     │   │  filter   │   │decision │  │    website
//!                  │  └──────────┘   └───────────┘   └────┬────┘  │
//!                  │                                      │       │
//!   307 /auth?...  │                                      ▼       │
//!   ◀──────────────┼─────────────────────────────── no token on   │
//!                  │                                protected page│
//!                  └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use gbhs_gate::config::{load_config, GateServerConfig};
use gbhs_gate::lifecycle::{signals, Shutdown};
use gbhs_gate::observability::{logging, metrics};
use gbhs_gate::security::request_path;
use gbhs_gate::{AccessGate, GateOutcome, HttpServer};

#[derive(Parser)]
#[command(name = "gbhs-gate")]
#[command(about = "Route access gate for the GBHS Bafia website", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the gate in front of the upstream website (default)
    Serve,
    /// Load and validate the configuration, then print a summary
    Check,
    /// Show how the gate treats a request path
    Explain {
        /// Request target, e.g. /admin/reports?page=2 (the query is ignored)
        path: String,
        /// Pretend the request carries this token
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GateServerConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Check => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            println!("configuration OK");
            Ok(())
        }
        Commands::Explain { path, token } => {
            let gate = AccessGate::new(config.gate);
            let path = request_path(&path);
            if gate.is_excluded(&path) {
                println!("{path}: excluded static asset, gate not invoked");
                return Ok(());
            }
            let class = gate.classify(&path);
            match gate.evaluate(&path, token.as_deref()) {
                GateOutcome::Continue => println!("{path}: {class} → continue"),
                GateOutcome::Redirect(target) => println!("{path}: {class} → redirect to {target}"),
            }
            Ok(())
        }
    }
}

async fn serve(config: GateServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing(&config.observability.log_level);

    tracing::info!("gbhs-gate v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.address,
        public_routes = config.gate.public_routes.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    HttpServer::new(config)?.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
