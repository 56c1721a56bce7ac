//! Basewatch API Server
//!
//! Run with: cargo run --bin basewatch-api
//!
//! # Configuration
//!
//! Read from `--config <path>` when given, otherwise from the default
//! locations (see [`Config::load_default`]). Environment variables:
//! - `BASEWATCH_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `BASEWATCH_API_PORT`: Port to listen on (default: 8082)
//! - `BASEWATCH_CORS_ORIGINS`: Comma separated allowed origins
//! - `BASEWATCH_ANALYSIS_DELAY_MS`: Simulated analysis time (default: 2000)
//! - `BASEWATCH_LOG_LEVEL` / `BASEWATCH_LOG_FORMAT`: Logging (info / pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use basewatch::api::{serve, AppState};
use basewatch::config::{Config, LoggingConfig};
use basewatch::Analyzer;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "basewatch-api")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Basewatch dashboard API server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting Basewatch API server v{}", env!("CARGO_PKG_VERSION"));

    let api_config = config.api_config();
    let analysis_config = config.analysis_config();

    tracing::info!("Analysis delay: {:?}", analysis_config.delay);
    if api_config.cors_origins.is_empty() {
        tracing::info!("CORS: any origin");
    } else {
        tracing::info!("CORS origins: {}", api_config.cors_origins.join(", "));
    }

    let state = AppState::new(Analyzer::new(analysis_config), api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("Basewatch API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
