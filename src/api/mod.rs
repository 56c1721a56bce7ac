//! Basewatch REST API
//!
//! HTTP API layer for Basewatch, built with Axum.
//!
//! # Endpoints
//!
//! ## Analysis
//! - `POST /api/analyze` - Mock AI analysis report for a token address
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use basewatch::analysis::{AnalysisConfig, Analyzer};
//! use basewatch::api::{serve, ApiConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(Analyzer::new(AnalysisConfig::default()), config.clone());
//!
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let api_routes = Router::new().route("/analyze", post(routes::analyze::analyze_token));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS policy for the dashboard origins
///
/// An empty list allows any origin. Origins that are not valid header
/// values are skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Basewatch API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Basewatch API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisConfig, Analyzer};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(Analyzer::new(AnalysisConfig::instant()), ApiConfig::default());
        build_router(state)
    }

    fn analyze_request(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["analysis_delay_ms"], 0);
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let app = create_test_app();

        let response = app
            .oneshot(analyze_request(r#"{"address": "0xabc123456789"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["symbol"], "0XABC");
        assert_eq!(body["metrics"]["riskScore"], json!(6.4));
        assert_eq!(body["metrics"]["sentiment"]["positive"], 68);
        assert_eq!(body["metrics"]["sentiment"]["mentions"], 1240);
        assert_eq!(body["metrics"]["technical"]["rating"], "Bullish");
        assert_eq!(
            body["metrics"]["technical"]["indicators"],
            json!({ "macd": true, "rsi": true, "stoch": false })
        );
        assert!(body["report"]
            .as_str()
            .unwrap()
            .contains("# AI Analysis Report for 0XABC"));
    }

    #[tokio::test]
    async fn test_analyze_short_address() {
        let app = create_test_app();

        let response = app
            .oneshot(analyze_request(r#"{"address": "eth"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["symbol"], "ETH");
    }

    #[tokio::test]
    async fn test_analyze_empty_address() {
        let app = create_test_app();

        let response = app
            .oneshot(analyze_request(r#"{"address": ""}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Token address is required" })
        );
    }

    #[tokio::test]
    async fn test_analyze_missing_address() {
        for body in [r#"{}"#, r#"{"address": null}"#, r#"{"other": "0xabc"}"#] {
            let app = create_test_app();

            let response = app.oneshot(analyze_request(body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(
                json_body(response).await,
                json!({ "error": "Token address is required" })
            );
        }
    }

    #[tokio::test]
    async fn test_analyze_invalid_json() {
        let app = create_test_app();

        let response = app.oneshot(analyze_request("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Failed to analyze token" })
        );
    }

    #[tokio::test]
    async fn test_analyze_falsy_address() {
        for body in [
            r#"{"address": 0}"#,
            r#"{"address": -0}"#,
            r#"{"address": 0.0}"#,
            r#"{"address": false}"#,
            r#"[]"#,
        ] {
            let app = create_test_app();

            let response = app.oneshot(analyze_request(body)).await.unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(
                json_body(response).await,
                json!({ "error": "Token address is required" })
            );
        }
    }

    #[tokio::test]
    async fn test_analyze_non_string_address() {
        for body in [
            r#"{"address": 12345}"#,
            r#"{"address": true}"#,
            r#"{"address": ["0xabc"]}"#,
            r#"{"address": {"value": "0xabc"}}"#,
            r#"null"#,
        ] {
            let app = create_test_app();

            let response = app.oneshot(analyze_request(body)).await.unwrap();

            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "body: {}",
                body
            );
            assert_eq!(
                json_body(response).await,
                json!({ "error": "Failed to analyze token" })
            );
        }
    }

    #[tokio::test]
    async fn test_analyze_without_content_type() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analyze")
                    .body(Body::from(r#"{"address": "0xdef"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["symbol"], "0XDEF");
    }

    #[tokio::test]
    async fn test_reports_differ_only_by_symbol() {
        let first = json_body(
            create_test_app()
                .oneshot(analyze_request(r#"{"address": "0xaaaa1111"}"#))
                .await
                .unwrap(),
        )
        .await;
        let second = json_body(
            create_test_app()
                .oneshot(analyze_request(r#"{"address": "0xbbbb2222"}"#))
                .await
                .unwrap(),
        )
        .await;

        assert_eq!(first["metrics"], second["metrics"]);
        assert_eq!(
            first["report"].as_str().unwrap().replace("0XAAA", "0XBBB"),
            second["report"].as_str().unwrap()
        );
    }

    #[tokio::test]
    async fn test_analyze_rejects_get() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/analyze")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let config = ApiConfig {
            cors_origins: vec!["http://localhost:8084".to_string()],
            ..Default::default()
        };
        let app = build_router(AppState::new(Analyzer::new(AnalysisConfig::instant()), config));

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/analyze")
                    .header("Origin", "http://localhost:8084")
                    .header("Access-Control-Request-Method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:8084")
        );
    }
}
