//! stocksynth server - synthetic OHLCV JSON API
//!
//! # Usage
//! ```sh
//! STOCKSYNTH_PORT=5000 cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `STOCKSYNTH_HOST` - Bind host (default: 0.0.0.0)
//! - `STOCKSYNTH_PORT` - Bind port (default: 5000)
//! - `DEFAULT_DAYS` / `MIN_DAYS` / `MAX_DAYS` - Series length policy (252 / 5 / 1260)

use anyhow::{Context, Result};
use stocksynth::config::Config;
use stocksynth::interfaces::http::{AppState, create_app};
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let config = Config::from_env()?;
    info!("stocksynth server {} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        "Series policy: default={} days, range=[{}, {}]",
        config.series.default_days, config.series.min_days, config.series.max_days
    );
    info!("Available endpoints:");
    info!("  GET  /api/health");
    info!(
        "  GET  /api/stock/{{symbol}}?days={}",
        config.series.default_days
    );
    info!(
        "  POST /api/stocks (JSON: {{symbols: [...], days: {}}})",
        config.series.default_days
    );

    let app = create_app(AppState::from_config(&config));

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received. Exiting...");
    }
}
