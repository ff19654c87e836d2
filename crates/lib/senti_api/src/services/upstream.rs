//! Upstream AI service client — forwards validated payloads and
//! classifies transport failures.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Timeout for `POST /analyze`.
pub const ANALYZE_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout for `POST /batch-analyze`.
pub const BATCH_ANALYZE_TIMEOUT: Duration = Duration::from_secs(60);
/// Timeout for `POST /chat`.
pub const CHAT_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout for `GET /health`.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout for `GET /metrics`.
pub const METRICS_TIMEOUT: Duration = Duration::from_secs(5);

/// A failed forwarding attempt, classified at the call site.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("connection refused")]
    ConnectionRefused,
    #[error("hostname resolution failed")]
    NameResolutionFailed,
    /// Upstream answered with a non-2xx status; body kept verbatim.
    #[error("upstream returned status {status}")]
    UpstreamHttp { status: u16, body: String },
    #[error("upstream did not respond within the timeout")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

/// Shared HTTP client for upstream calls.
///
/// One attempt per inbound request, no retry; the per-call timeout is
/// the only resilience mechanism. A fired timeout abandons the wait
/// without guaranteeing the upstream call is aborted.
#[derive(Clone, Default)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// `GET url` and parse the JSON body.
    pub async fn get_json(&self, url: &str, timeout: Duration) -> Result<Value, ForwardError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(url, e))?;
        read_json(url, response).await
    }

    /// `POST payload` as JSON to `url` and parse the JSON body.
    pub async fn post_json(
        &self,
        url: &str,
        payload: &Value,
        timeout: Duration,
    ) -> Result<Value, ForwardError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(url, e))?;
        read_json(url, response).await
    }
}

/// Surfaces a non-2xx upstream response as `UpstreamHttp`, otherwise
/// parses the body as JSON.
async fn read_json(url: &str, response: reqwest::Response) -> Result<Value, ForwardError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(url = %url, status = status.as_u16(), "upstream rejected request");
        return Err(ForwardError::UpstreamHttp {
            status: status.as_u16(),
            body,
        });
    }
    response.json().await.map_err(|e| classify(url, e))
}

/// Maps a `reqwest::Error` onto the closed `ForwardError` variants.
fn classify(url: &str, err: reqwest::Error) -> ForwardError {
    let classified = if err.is_timeout() {
        ForwardError::Timeout
    } else if err.is_connect() {
        classify_connect(&err)
    } else {
        ForwardError::Other(err.to_string())
    };
    warn!(url = %url, error = %err, classified = %classified, "upstream call failed");
    classified
}

/// Walks the source chain of a connect failure to tell DNS failures
/// apart from refused connections.
fn classify_connect(err: &reqwest::Error) -> ForwardError {
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>()
            && io.kind() == std::io::ErrorKind::ConnectionRefused
        {
            return ForwardError::ConnectionRefused;
        }
        let text = cause.to_string();
        if text.contains("dns error") || text.contains("failed to lookup") {
            return ForwardError::NameResolutionFailed;
        }
        source = cause.source();
    }
    ForwardError::ConnectionRefused
}
