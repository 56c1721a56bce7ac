//! Analyzer
//!
//! Validates the address, derives the symbol, waits out the simulated
//! processing time and assembles the placeholder analysis.

use std::time::Duration;

use crate::analysis::error::{AnalysisError, AnalysisResult};
use crate::analysis::report::{derive_symbol, render_report};
use crate::analysis::types::{AnalysisMetrics, TokenAnalysis};

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Artificial processing delay applied to every successful request
    pub delay: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(2000),
        }
    }
}

impl AnalysisConfig {
    /// Config with a custom delay in milliseconds
    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Config with no delay, for tests and benchmarks
    pub fn instant() -> Self {
        Self::with_delay_ms(0)
    }
}

/// Produces mock token analyses
///
/// Holds no mutable state; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create a new analyzer
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Configured artificial delay
    pub fn delay(&self) -> Duration {
        self.config.delay
    }

    /// Analyze a token address
    ///
    /// Any non-empty string is accepted; no address format is enforced.
    pub async fn analyze(&self, address: &str) -> AnalysisResult<TokenAnalysis> {
        if address.is_empty() {
            return Err(AnalysisError::MissingAddress);
        }

        let symbol = derive_symbol(address);

        tracing::debug!(
            symbol = %symbol,
            delay_ms = self.config.delay.as_millis() as u64,
            "Simulating analysis"
        );

        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }

        Ok(TokenAnalysis {
            report: render_report(&symbol),
            metrics: AnalysisMetrics::placeholder(),
            symbol,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_analyze_derives_symbol() {
        let analyzer = Analyzer::new(AnalysisConfig::instant());
        let analysis = analyzer.analyze("0xabc123456789").await.unwrap();

        assert_eq!(analysis.symbol, "0XABC");
        assert_eq!(analysis.metrics.risk_score, 6.4);
        assert!(analysis.report.contains("AI Analysis Report for 0XABC"));
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_address() {
        let analyzer = Analyzer::new(AnalysisConfig::instant());
        let err = analyzer.analyze("").await.unwrap_err();

        assert_eq!(err, AnalysisError::MissingAddress);
        assert_eq!(err.to_string(), "Token address is required");
    }

    #[tokio::test]
    async fn test_analyze_accepts_non_address_text() {
        let analyzer = Analyzer::new(AnalysisConfig::instant());
        let analysis = analyzer.analyze("hello world").await.unwrap();

        assert_eq!(analysis.symbol, "HELLO");
    }

    #[tokio::test]
    async fn test_metrics_identical_across_addresses() {
        let analyzer = Analyzer::new(AnalysisConfig::instant());
        let a = analyzer.analyze("0x1111111111").await.unwrap();
        let b = analyzer.analyze("0xffffffffff").await.unwrap();

        assert_eq!(a.metrics, b.metrics);
        assert_eq!(a.report.replace(&a.symbol, &b.symbol), b.report);
    }

    #[tokio::test]
    async fn test_analyze_waits_for_configured_delay() {
        let analyzer = Analyzer::new(AnalysisConfig::with_delay_ms(50));
        let started = Instant::now();

        analyzer.analyze("0xabc").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_missing_address_skips_delay() {
        let analyzer = Analyzer::new(AnalysisConfig::with_delay_ms(5_000));
        let started = Instant::now();

        assert!(analyzer.analyze("").await.is_err());
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
