//! Service directory and unmatched-route handling.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

/// Every route the gateway serves, for the directory and 404 responses.
const ENDPOINTS: [(&str, &str); 7] = [
    ("GET /health", "Gateway liveness"),
    ("GET /api", "This directory"),
    ("GET /api/health", "Gateway and AI service health"),
    ("GET /api/metrics", "AI service metrics"),
    ("POST /api/chat", "Chat with the conversational AI"),
    ("POST /api/analyze", "Analyze sentiment of a single text"),
    ("POST /api/batch-analyze", "Analyze sentiment of up to 100 texts"),
];

/// `GET /api` — static service/endpoint directory.
pub async fn api_index_handler() -> Json<Value> {
    let endpoints: serde_json::Map<String, Value> = ENDPOINTS
        .iter()
        .map(|(route, description)| ((*route).to_string(), json!(description)))
        .collect();
    Json(json!({
        "service": "Senti Gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": endpoints,
    }))
}

/// Fallback — unmatched routes answer 404 with the available endpoints.
pub async fn not_found_handler() -> Response {
    let available: Vec<&str> = ENDPOINTS.iter().map(|(route, _)| *route).collect();
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "available_endpoints": available,
        })),
    )
        .into_response()
}
