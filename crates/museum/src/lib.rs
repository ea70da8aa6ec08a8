//! Antiquarium Museum Lookup Service
//!
//! Fetches artifact records from the external museum registry:
//! - HTTP client for the museum REST API, with transparent retries of idempotent GETs
//! - Mock museum service for testing and development
//! - Configurable provider, base URL, timeout and retry budget

pub mod client;
pub mod mock;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum MuseumError {
    #[error("Museum configuration error: {0}")]
    Configuration(String),

    /// The museum has no artifact under the requested inventory id
    #[error("Artifact {0} not found in museum registry")]
    NotFound(String),

    #[error("Museum request error: {0}")]
    Request(String),

    #[error("Museum response error: {0}")]
    Response(String),
}

/// Artifact as exposed by the museum registry.
///
/// Flat, string-typed shape: era and material are raw tokens and are only
/// validated when mapped into the local entity. The same shape is returned
/// to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactDto {
    pub inventory_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub acquisition_date: NaiveDate,
    pub name: String,
    pub department: String,
    pub era: String,
    pub material: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Museum service configuration
#[derive(Debug, Clone)]
pub struct MuseumConfig {
    /// Museum provider (http, mock)
    pub provider: String,
    /// Base URL of the museum REST API
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Total attempts for a lookup, including the first one
    pub max_attempts: u32,
    /// Linear backoff step between attempts
    pub retry_backoff_ms: u64,
}

impl MuseumConfig {
    /// Create museum config from environment variables
    pub fn from_env() -> Result<Self, MuseumError> {
        let provider = std::env::var("MUSEUM_PROVIDER").unwrap_or_else(|_| "mock".to_string());

        let base_url = std::env::var("MUSEUM_API_BASE")
            .unwrap_or_else(|_| "https://api.antiquarium-museum.ru".to_string());

        let timeout_secs = std::env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let max_attempts = std::env::var("MUSEUM_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let retry_backoff_ms = std::env::var("MUSEUM_RETRY_BACKOFF_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500);

        if max_attempts == 0 {
            return Err(MuseumError::Configuration(
                "MUSEUM_MAX_ATTEMPTS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            provider,
            base_url,
            timeout_secs,
            max_attempts,
            retry_backoff_ms,
        })
    }
}

/// Museum lookup trait for different backends
#[async_trait::async_trait]
pub trait MuseumService: Send + Sync {
    /// Fetch a single artifact by its canonical inventory id.
    ///
    /// Returns `MuseumError::NotFound` when the registry has no such artifact.
    async fn fetch_artifact(&self, inventory_id: &str) -> Result<ArtifactDto, MuseumError>;
}

/// Factory for creating MuseumService implementations
pub struct MuseumServiceFactory;

impl MuseumServiceFactory {
    pub fn create(config: MuseumConfig) -> Result<Box<dyn MuseumService>, MuseumError> {
        match config.provider.as_str() {
            "http" => {
                tracing::info!(base_url = %config.base_url, "Creating museum HTTP client");
                Ok(Box::new(client::MuseumClient::new(config)?))
            }
            "mock" => {
                tracing::info!("Creating mock museum service");
                Ok(Box::new(mock::MockMuseumService::new()))
            }
            provider => Err(MuseumError::Configuration(format!(
                "Unknown museum provider: {}. Supported providers: http, mock",
                provider
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str) -> MuseumConfig {
        MuseumConfig {
            provider: provider.to_string(),
            base_url: "http://localhost:9999".to_string(),
            timeout_secs: 5,
            max_attempts: 3,
            retry_backoff_ms: 0,
        }
    }

    #[test]
    fn test_factory_mock_succeeds() {
        assert!(MuseumServiceFactory::create(config("mock")).is_ok());
    }

    #[test]
    fn test_factory_http_succeeds() {
        assert!(MuseumServiceFactory::create(config("http")).is_ok());
    }

    #[test]
    fn test_factory_unknown_provider() {
        let err = match MuseumServiceFactory::create(config("ftp")) {
            Err(e) => e,
            Ok(_) => panic!("Expected error for unknown provider"),
        };
        assert!(err.to_string().contains("Unknown museum provider: ftp"));
    }

    #[test]
    fn test_artifact_dto_deserializes_without_optional_fields() {
        let dto: ArtifactDto = serde_json::from_value(serde_json::json!({
            "inventory_id": "11111111-1111-1111-1111-111111111111",
            "acquisition_date": "2023-01-01",
            "name": "Ancient Vase",
            "department": "Archaeology",
            "era": "antiquity",
            "material": "ceramic"
        }))
        .unwrap();

        assert_eq!(dto.name, "Ancient Vase");
        assert_eq!(
            dto.acquisition_date,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
        assert!(dto.created_at.is_none());
        assert!(dto.description.is_none());
    }

    #[test]
    fn test_artifact_dto_omits_missing_created_at() {
        let dto = ArtifactDto {
            inventory_id: Uuid::new_v4(),
            created_at: None,
            acquisition_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            name: "Bronze Axe".to_string(),
            department: "Metalwork".to_string(),
            era: "bronze_age".to_string(),
            material: "metal".to_string(),
            description: None,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("created_at").is_none());
        assert_eq!(json["acquisition_date"], "2023-01-01");
        assert!(json["description"].is_null());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MuseumError::NotFound("abc".to_string()).to_string(),
            "Artifact abc not found in museum registry"
        );
        assert_eq!(
            MuseumError::Request("connection refused".to_string()).to_string(),
            "Museum request error: connection refused"
        );
    }
}
