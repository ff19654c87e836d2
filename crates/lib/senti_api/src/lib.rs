//! # senti_api
//!
//! HTTP gateway library for Senti — a unified API surface over the
//! sentiment-analysis and conversational-AI microservices.

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;
pub mod validate;

use axum::Router;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::handlers::{analyze, chat, health, index, metrics};
use crate::services::upstream::UpstreamClient;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration, read once at startup.
    pub config: GatewayConfig,
    /// Shared HTTP client for upstream calls.
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            upstream: UpstreamClient::new(),
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api", get(index::api_index_handler))
        .route("/api/health", get(health::api_health_handler))
        .route("/api/metrics", get(metrics::metrics_handler))
        .route("/api/chat", post(chat::chat_handler))
        .route("/api/analyze", post(analyze::analyze_handler))
        .route("/api/batch-analyze", post(analyze::batch_analyze_handler))
        .fallback(index::not_found_handler)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
