//! HTTP API Client
//!
//! Functions for communicating with the Basewatch REST API.

use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082/api";

const API_URL_STORAGE_KEY: &str = "basewatch_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    normalize_base(&url)
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_STORAGE_KEY, &normalize_base(url));
        }
    }
}

/// Remove trailing slashes
fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Health endpoint lives beside `/api`, not under it
fn health_url(api_base: &str) -> String {
    let root = api_base.strip_suffix("/api").unwrap_or(api_base);
    format!("{}/health", root)
}

// ============ Response Types ============

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub symbol: String,
    pub report: String,
    pub metrics: AnalysisMetrics,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetrics {
    pub risk_score: f64,
    pub sentiment: SentimentMetrics,
    pub technical: TechnicalMetrics,
}

impl AnalysisMetrics {
    /// Risk bucket shown under the score
    pub fn risk_label(&self) -> &'static str {
        if self.risk_score < 4.0 {
            "Low Risk"
        } else if self.risk_score < 7.0 {
            "Medium Risk"
        } else {
            "High Risk"
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct SentimentMetrics {
    pub positive: u32,
    pub mentions: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct TechnicalMetrics {
    pub rating: String,
    pub indicators: TechnicalIndicators,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct TechnicalIndicators {
    pub macd: bool,
    pub rsi: bool,
    pub stoch: bool,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    #[serde(default)]
    pub analysis_delay_ms: u64,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

// ============ API Functions ============

/// Request a token analysis report
pub async fn analyze_token(address: &str) -> Result<AnalysisResponse, String> {
    #[derive(serde::Serialize)]
    struct AnalysisRequest<'a> {
        address: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/analyze", api_base))
        .json(&AnalysisRequest { address })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Failed to analyze token".to_string(),
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let response = Request::get(&health_url(&get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_url() {
        assert_eq!(health_url("http://localhost:8082/api"), "http://localhost:8082/health");
        assert_eq!(health_url("https://monitor.example"), "https://monitor.example/health");
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(" http://localhost:8082/api/ "), "http://localhost:8082/api");
    }

    #[test]
    fn test_analysis_response_parses() {
        let json = r#"{
            "success": true,
            "symbol": "0XABC",
            "report": "\n# AI Analysis Report for 0XABC\n",
            "metrics": {
                "riskScore": 6.4,
                "sentiment": { "positive": 68, "mentions": 1240 },
                "technical": {
                    "rating": "Bullish",
                    "indicators": { "macd": true, "rsi": true, "stoch": false }
                }
            }
        }"#;

        let response: AnalysisResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.symbol, "0XABC");
        assert_eq!(response.metrics.risk_score, 6.4);
        assert_eq!(response.metrics.sentiment.mentions, 1240);
        assert!(!response.metrics.technical.indicators.stoch);
        assert_eq!(response.metrics.risk_label(), "Medium Risk");
    }
}
