//! Prediction API service.
//!
//! A small HTTP service exposing a single prediction endpoint.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────┐
//!                      │              PREDICTION API               │
//!                      │                                           │
//!   Client Request     │  ┌─────────┐   ┌─────────┐   ┌─────────┐  │
//!   ──────────────────▶│  │  cors   │──▶│  http   │──▶│handlers │  │
//!                      │  │  layer  │   │ server  │   │/predict │  │
//!                      │  └─────────┘   └─────────┘   └────┬────┘  │
//!                      │                                   │       │
//!   Client Response    │  ┌─────────┐                      │       │
//!   ◀──────────────────┼──│ error → │◀─────────────────────┘       │
//!                      │  │ 400 JSON│                              │
//!                      │  └─────────┘                              │
//!                      │                                           │
//!                      │  ┌─────────────────────────────────────┐  │
//!                      │  │        Cross-Cutting Concerns       │  │
//!                      │  │  ┌────────┐ ┌─────────┐ ┌─────────┐ │  │
//!                      │  │  │ config │ │ tracing │ │lifecycle│ │  │
//!                      │  │  └────────┘ └─────────┘ └─────────┘ │  │
//!                      │  └─────────────────────────────────────┘  │
//!                      └───────────────────────────────────────────┘
//! ```
//!
//! The prediction itself is a placeholder constant until a trained model
//! is wired in; see `http::handlers`.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prediction_api::config::loader::load_config;
use prediction_api::config::ServiceConfig;
use prediction_api::http::HttpServer;
use prediction_api::lifecycle::Shutdown;

#[derive(Parser)]
#[command(name = "prediction-api")]
#[command(about = "HTTP service exposing a JSON prediction endpoint", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. "127.0.0.1:5000").
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration before tracing init so the configured log level
    // can seed the default filter.
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "prediction_api={},tower_http=info",
                    config.observability.log_level
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("prediction-api v0.1.0 starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        allowed_origins = ?config.cors.allowed_origins,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
