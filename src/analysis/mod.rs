//! Token Analysis
//!
//! Mock "AI analysis" for token addresses. Nothing here talks to a chain or
//! a model: the symbol is derived from the address text and the report and
//! metrics are placeholder constants.
//!
//! - **types**: Report and metric structures returned to clients
//! - **report**: Symbol derivation and report template rendering
//! - **engine**: The [`Analyzer`] that validates input and simulates latency
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use basewatch::analysis::{AnalysisConfig, Analyzer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let analyzer = Analyzer::new(AnalysisConfig::default());
//!     let analysis = analyzer.analyze("0x4200000000000000000000000000000000000006").await?;
//!
//!     println!("{} risk score: {}", analysis.symbol, analysis.metrics.risk_score);
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod report;
pub mod types;

pub use engine::{AnalysisConfig, Analyzer};
pub use error::{AnalysisError, AnalysisResult};
pub use report::{derive_symbol, render_report, SYMBOL_LENGTH};
pub use types::{
    AnalysisMetrics, SentimentMetrics, TechnicalIndicators, TechnicalMetrics, TokenAnalysis,
};
