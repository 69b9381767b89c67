use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use review_common::error::AppError;
use review_common::types::PollCursor;

/// Source of raw status API responses for a query window.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Perform one request for updates since `from`. No retries.
    async fn fetch_statuses(&self, from: PollCursor) -> Result<Value, AppError>;
}

/// HTTP client for the Practicum homework status endpoint.
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: &str, token: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch_statuses(&self, from: PollCursor) -> Result<Value, AppError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from.timestamp())])
            .send()
            .await
            .map_err(|e| AppError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ServerUnavailable {
                code: status.as_u16(),
                reason: format!(
                    "{} (from_date={from})",
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::UnexpectedShape(format!("тело ответа не является JSON: {e}")))
    }
}
