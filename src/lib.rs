//! # Basewatch
//!
//! Base L2 Token Monitor - backend for a token monitoring dashboard with a
//! mock AI analysis endpoint.
//!
//! All analysis output is placeholder content: the symbol is derived from the
//! submitted address and the report and metrics are constants. There is no
//! chain client, no persistence and no authentication.
//!
//! ## Modules
//!
//! - [`analysis`]: Symbol derivation, report template, simulated analyzer
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use basewatch::{Analyzer, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api_config = config.api_config();
//!
//!     let state = AppState::new(Analyzer::new(config.analysis_config()), api_config.clone());
//!     basewatch::serve(state, &api_config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod config;

// Re-export top-level types for convenience
pub use analysis::{
    derive_symbol, render_report, AnalysisConfig, AnalysisError, AnalysisMetrics, Analyzer,
    TokenAnalysis,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
