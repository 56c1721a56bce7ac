//! Analysis result types
//!
//! Field names serialize in camelCase because the dashboard reads them
//! as-is (`riskScore`, `sentiment.positive`, ...).

use serde::{Deserialize, Serialize};

/// Result of analyzing a single token address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAnalysis {
    /// Symbol derived from the address
    pub symbol: String,
    /// Markdown-ish report text with the symbol substituted in
    pub report: String,
    /// Headline numbers shown as cards next to the report
    pub metrics: AnalysisMetrics,
}

/// Headline metrics for a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetrics {
    /// Risk on a 0-10 scale
    pub risk_score: f64,
    pub sentiment: SentimentMetrics,
    pub technical: TechnicalMetrics,
}

/// Social sentiment summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentMetrics {
    /// Percentage of positive mentions
    pub positive: u32,
    /// Total mentions counted
    pub mentions: u32,
}

/// Technical analysis summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalMetrics {
    /// Overall rating, e.g. "Bullish"
    pub rating: String,
    pub indicators: TechnicalIndicators,
}

/// Which indicators currently read positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    pub macd: bool,
    pub rsi: bool,
    pub stoch: bool,
}

impl AnalysisMetrics {
    /// The fixed metrics block attached to every report
    pub fn placeholder() -> Self {
        Self {
            risk_score: 6.4,
            sentiment: SentimentMetrics {
                positive: 68,
                mentions: 1240,
            },
            technical: TechnicalMetrics {
                rating: "Bullish".to_string(),
                indicators: TechnicalIndicators {
                    macd: true,
                    rsi: true,
                    stoch: false,
                },
            },
        }
    }

    /// Human label for the risk score bucket
    pub fn risk_label(&self) -> &'static str {
        match self.risk_score {
            s if s < 4.0 => "Low Risk",
            s if s < 7.0 => "Medium Risk",
            _ => "High Risk",
        }
    }
}

impl Default for AnalysisMetrics {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_serialize_camel_case() {
        let json = serde_json::to_value(AnalysisMetrics::placeholder()).unwrap();

        assert_eq!(json["riskScore"], serde_json::json!(6.4));
        assert_eq!(json["sentiment"]["positive"], 68);
        assert_eq!(json["sentiment"]["mentions"], 1240);
        assert_eq!(json["technical"]["rating"], "Bullish");
        assert_eq!(json["technical"]["indicators"]["macd"], true);
        assert_eq!(json["technical"]["indicators"]["rsi"], true);
        assert_eq!(json["technical"]["indicators"]["stoch"], false);
        assert!(json.get("risk_score").is_none());
    }

    #[test]
    fn test_risk_label() {
        assert_eq!(AnalysisMetrics::placeholder().risk_label(), "Medium Risk");

        let mut metrics = AnalysisMetrics::placeholder();
        metrics.risk_score = 2.0;
        assert_eq!(metrics.risk_label(), "Low Risk");
        metrics.risk_score = 9.1;
        assert_eq!(metrics.risk_label(), "High Risk");
    }
}
