//! Conversational AI endpoint — free-form passthrough.

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::services::upstream::CHAT_TIMEOUT;

/// `POST /api/chat` — relay a chat request to the conversational AI
/// service. The body is forwarded untouched; the conversational AI owns
/// its own request schema.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Value>> {
    let url = format!("{}/chat", state.config.conversational_ai_url);
    let result = state
        .upstream
        .post_json(&url, &body, CHAT_TIMEOUT)
        .await
        .map_err(|e| AppError::upstream(e, "Failed to process chat message"))?;
    Ok(Json(result))
}
