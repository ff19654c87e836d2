//! Gateway configuration.

/// Configuration for the gateway server. Built once at startup,
/// immutable for the process lifetime.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:3000").
    pub bind_addr: String,
    /// Base URL of the sentiment analysis service.
    pub ai_service_url: String,
    /// Base URL of the conversational AI service.
    pub conversational_ai_url: String,
}

impl GatewayConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                | Default                  |
    /// |-------------------------|--------------------------|
    /// | `PORT`                  | `3000`                   |
    /// | `AI_SERVICE_URL` (legacy: `FASTAPI_URL`) | `http://localhost:8000` |
    /// | `CONVERSATIONAL_AI_URL` | `http://localhost:8001`  |
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Self {
            bind_addr: format!("0.0.0.0:{port}"),
            ai_service_url: base_url(
                std::env::var("AI_SERVICE_URL")
                    .or_else(|_| std::env::var("FASTAPI_URL"))
                    .unwrap_or_else(|_| "http://localhost:8000".into()),
            ),
            conversational_ai_url: base_url(
                std::env::var("CONVERSATIONAL_AI_URL")
                    .unwrap_or_else(|_| "http://localhost:8001".into()),
            ),
        }
    }
}

/// Strips trailing slashes so route paths can be appended directly.
fn base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
