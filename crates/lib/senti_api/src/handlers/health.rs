//! Health endpoints — gateway liveness and aggregated upstream health.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tracing::warn;

use crate::AppState;
use crate::services::upstream::HEALTH_TIMEOUT;

/// `GET /health` — gateway liveness. Local only, never forwards.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "senti-gateway",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "fastapi_url": state.config.ai_service_url,
    }))
}

/// `GET /api/health` — gateway plus sentiment-service health.
///
/// `web_service` always reports healthy: the gateway answering at all
/// proves the process is alive, whatever the upstream state. A failed
/// upstream probe degrades `ai_service` and the status code only.
pub async fn api_health_handler(State(state): State<AppState>) -> Response {
    let url = format!("{}/health", state.config.ai_service_url);
    match state.upstream.get_json(&url, HEALTH_TIMEOUT).await {
        Ok(ai_service) => Json(json!({
            "web_service": "healthy",
            "ai_service": ai_service,
        }))
        .into_response(),
        Err(err) => {
            warn!(error = %err, "AI service health probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "web_service": "healthy",
                    "ai_service": "unavailable",
                    "error": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}
