//! Catalog HTTP Client Implementation
//!
//! POSTs publications to `{base_url}/items` and reads the assigned
//! `public_id` from the response. Publishing is not retried here: the
//! endpoint is not idempotent.

use std::time::Duration;

use serde::Deserialize;

use crate::{CatalogConfig, CatalogError, CatalogPublication, CatalogService};

#[derive(Debug, Deserialize)]
struct PublishResponse {
    public_id: Option<String>,
}

/// Real HTTP client for the public catalog.
pub struct CatalogClient {
    http: reqwest::Client,
    items_url: String,
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CatalogError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            items_url: format!("{}/items", config.base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait::async_trait]
impl CatalogService for CatalogClient {
    async fn publish_artifact(
        &self,
        publication: CatalogPublication,
    ) -> Result<String, CatalogError> {
        tracing::debug!(
            url = %self.items_url,
            inventory_id = %publication.inventory_id,
            "Publishing artifact to catalog"
        );

        let response = self
            .http
            .post(&self.items_url)
            .json(&publication)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(CatalogError::Response(format!(
                "Catalog API returned {}: {}",
                status, body
            )));
        }

        let parsed: PublishResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Response(format!("Failed to parse response: {}", e)))?;

        match parsed.public_id {
            Some(public_id) if !public_id.is_empty() => {
                tracing::debug!(public_id = %public_id, "Artifact published to catalog");
                Ok(public_id)
            }
            _ => Err(CatalogError::Response(
                "Invalid response data: missing 'public_id'".to_string(),
            )),
        }
    }
}
