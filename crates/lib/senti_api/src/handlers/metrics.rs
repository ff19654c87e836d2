//! Metrics relay.

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::services::upstream::METRICS_TIMEOUT;

/// `GET /api/metrics` — relay sentiment-service metrics verbatim.
pub async fn metrics_handler(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let url = format!("{}/metrics", state.config.ai_service_url);
    let result = state
        .upstream
        .get_json(&url, METRICS_TIMEOUT)
        .await
        .map_err(|e| AppError::upstream(e, "Failed to fetch metrics"))?;
    Ok(Json(result))
}
