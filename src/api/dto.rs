//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analysis::{AnalysisMetrics, TokenAnalysis};

// ============================================
// ANALYSIS DTOs
// ============================================

/// Token analysis request
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisRequest {
    /// Token address as sent; only a non-empty string is analyzed
    #[serde(default)]
    pub address: Option<Value>,
}

impl AnalysisRequest {
    /// Address text to analyze.
    ///
    /// An absent field and the JSON falsy values (`null`, `false`, `0`, `""`)
    /// come back empty and are reported as a missing address. Any other
    /// non-string value is an error.
    pub fn address(&self) -> Result<&str, String> {
        match &self.address {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(""),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(""),
            Some(Value::String(address)) => Ok(address.as_str()),
            Some(other) => Err(format!("address is not a string: {}", other)),
        }
    }
}

/// Token analysis response
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Always true on the success path
    pub success: bool,
    /// Symbol derived from the address
    pub symbol: String,
    /// Report text
    pub report: String,
    /// Headline metrics
    pub metrics: AnalysisMetrics,
}

impl From<TokenAnalysis> for AnalysisResponse {
    fn from(analysis: TokenAnalysis) -> Self {
        Self {
            success: true,
            symbol: analysis.symbol,
            report: analysis.report,
            metrics: analysis.metrics,
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
    /// Artificial delay applied to analysis requests
    pub analysis_delay_ms: u64,
}
