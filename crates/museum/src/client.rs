//! Museum HTTP Client Implementation
//!
//! GETs artifacts from `{base_url}/artifacts/{inventory_id}`. Transport
//! failures and 5xx responses are retried with a linear backoff; a 404 is
//! reported as `MuseumError::NotFound` without retrying.

use std::time::Duration;

use crate::{ArtifactDto, MuseumConfig, MuseumError, MuseumService};

/// Outcome of a single attempt that did not produce an artifact
enum AttemptError {
    Retryable(MuseumError),
    Fatal(MuseumError),
}

/// Real HTTP client for the museum registry.
pub struct MuseumClient {
    http: reqwest::Client,
    base_url: String,
    max_attempts: u32,
    backoff: Duration,
}

impl MuseumClient {
    /// Create a new museum client from configuration.
    pub fn new(config: MuseumConfig) -> Result<Self, MuseumError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MuseumError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_attempts: config.max_attempts.max(1),
            backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    async fn fetch_once(&self, url: &str, inventory_id: &str) -> Result<ArtifactDto, AttemptError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AttemptError::Retryable(MuseumError::Request(e.to_string())))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::warn!(inventory_id, "Artifact not found in museum registry");
            return Err(AttemptError::Fatal(MuseumError::NotFound(
                inventory_id.to_string(),
            )));
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            let err = MuseumError::Response(format!("Museum API returned {}: {}", status, body));
            return Err(if status.is_server_error() {
                AttemptError::Retryable(err)
            } else {
                AttemptError::Fatal(err)
            });
        }

        response.json::<ArtifactDto>().await.map_err(|e| {
            AttemptError::Fatal(MuseumError::Response(format!(
                "Failed to parse museum artifact: {}",
                e
            )))
        })
    }
}

#[async_trait::async_trait]
impl MuseumService for MuseumClient {
    async fn fetch_artifact(&self, inventory_id: &str) -> Result<ArtifactDto, MuseumError> {
        let url = format!("{}/artifacts/{}", self.base_url, inventory_id);
        tracing::debug!(url = %url, "Fetching artifact from museum registry");

        let mut attempt = 1;
        loop {
            match self.fetch_once(&url, inventory_id).await {
                Ok(artifact) => {
                    tracing::debug!(inventory_id, attempt, "Fetched artifact from museum registry");
                    return Ok(artifact);
                }
                Err(AttemptError::Fatal(e)) => return Err(e),
                Err(AttemptError::Retryable(e)) if attempt >= self.max_attempts => {
                    tracing::error!(inventory_id, attempt, error = %e, "Museum lookup failed, giving up");
                    return Err(e);
                }
                Err(AttemptError::Retryable(e)) => {
                    tracing::warn!(inventory_id, attempt, error = %e, "Museum lookup failed, retrying");
                    tokio::time::sleep(self.backoff * attempt).await;
                    attempt += 1;
                }
            }
        }
    }
}
