//! Analysis Routes
//!
//! - POST /api/analyze - Generate a mock AI report for a token address
//!
//! The body is parsed by hand rather than with the `Json` extractor so that
//! a missing content type or malformed payload surfaces as the generic
//! analysis failure instead of an extractor rejection.

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::api::dto::{AnalysisRequest, AnalysisResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/analyze
///
/// Returns 400 when `address` is missing or falsy (`null`, `false`, `0`,
/// `""`), 500 when the body is not JSON, is `null`, or carries a non-string
/// address, and the placeholder report otherwise.
pub async fn analyze_token(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<AnalysisResponse>> {
    let request = parse_request(&body)?;
    let address = request.address().map_err(ApiError::Analysis)?;

    let analysis = state.analyzer.analyze(address).await?;

    tracing::info!(symbol = %analysis.symbol, "Token analysis generated");

    Ok(Json(analysis.into()))
}

fn parse_request(body: &[u8]) -> ApiResult<AnalysisRequest> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::Analysis(format!("Invalid request body: {}", e)))?;

    match value {
        Value::Null => Err(ApiError::Analysis("Request body is null".to_string())),
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| ApiError::Analysis(format!("Invalid request body: {}", e))),
        // Other JSON values have no `address` field
        _ => Ok(AnalysisRequest::default()),
    }
}
