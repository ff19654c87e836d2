//! Sentiment analysis endpoints — validate, forward, relay.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use tracing::info;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::services::upstream::{ANALYZE_TIMEOUT, BATCH_ANALYZE_TIMEOUT};
use crate::validate::{validate_text, validate_texts};

/// Log echoes of client text are capped at this many characters.
const ECHO_CHARS: usize = 50;

/// `POST /api/analyze` — analyze the sentiment of a single text.
///
/// The upstream response (`text`, `sentiment`, `confidence`,
/// `timestamp`) is relayed verbatim.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Value>> {
    let text = body.get("text").and_then(Value::as_str).unwrap_or_default();
    let text = validate_text(text)?;

    let url = format!("{}/analyze", state.config.ai_service_url);
    let result = state
        .upstream
        .post_json(&url, &json!({ "text": text }), ANALYZE_TIMEOUT)
        .await
        .map_err(|e| AppError::upstream(e, "Failed to analyze sentiment"))?;

    let sentiment = result
        .get("sentiment")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let confidence = result
        .get("confidence")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    info!(
        text = %truncate(&text, ECHO_CHARS),
        sentiment = %sentiment,
        confidence = %format!("{confidence:.4}"),
        "analyzed text"
    );

    Ok(Json(result))
}

/// `POST /api/batch-analyze` — analyze the sentiment of up to 100 texts.
pub async fn batch_analyze_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Value>> {
    let texts = validate_texts(body.get("texts"))?;

    let url = format!("{}/batch-analyze", state.config.ai_service_url);
    let result = state
        .upstream
        .post_json(&url, &json!({ "texts": texts }), BATCH_ANALYZE_TIMEOUT)
        .await
        .map_err(|e| AppError::upstream(e, "Failed to process batch analysis"))?;

    let first = texts.first().map(String::as_str).unwrap_or_default();
    info!(
        count = texts.len(),
        first_text = %truncate(first, ECHO_CHARS),
        "analyzed batch"
    );

    Ok(Json(result))
}

/// First `max` characters of `s`, cut on a char boundary.
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
