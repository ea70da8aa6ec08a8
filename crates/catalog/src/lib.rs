//! Antiquarium Public Catalog Service
//!
//! Publishes artifacts to the public museum catalog:
//! - HTTP client for the catalog REST API
//! - Mock catalog service for testing and development

pub mod client;
pub mod mock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog configuration error: {0}")]
    Configuration(String),

    #[error("Catalog request error: {0}")]
    Request(String),

    #[error("Catalog response error: {0}")]
    Response(String),
}

/// The subset of an artifact that is published to the public catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPublication {
    pub inventory_id: Uuid,
    pub name: String,
    pub era: String,
    pub material: String,
    pub description: Option<String>,
}

/// Catalog service configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog provider (http, mock)
    pub provider: String,
    /// Base URL of the catalog REST API
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Create catalog config from environment variables
    pub fn from_env() -> Result<Self, CatalogError> {
        let provider = std::env::var("CATALOG_PROVIDER").unwrap_or_else(|_| "mock".to_string());

        let base_url = std::env::var("CATALOG_API_BASE")
            .unwrap_or_else(|_| "https://catalog.antiquarium-museum.ru".to_string());

        let timeout_secs = std::env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            provider,
            base_url,
            timeout_secs,
        })
    }
}

/// Public catalog trait for different backends
#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    /// Publish an artifact and return the public identifier the catalog assigned.
    async fn publish_artifact(&self, publication: CatalogPublication)
        -> Result<String, CatalogError>;
}

/// Factory for creating CatalogService implementations
pub struct CatalogServiceFactory;

impl CatalogServiceFactory {
    pub fn create(config: CatalogConfig) -> Result<Box<dyn CatalogService>, CatalogError> {
        match config.provider.as_str() {
            "http" => {
                tracing::info!(base_url = %config.base_url, "Creating catalog HTTP client");
                Ok(Box::new(client::CatalogClient::new(config)?))
            }
            "mock" => {
                tracing::info!("Creating mock catalog service");
                Ok(Box::new(mock::MockCatalogService::new()))
            }
            provider => Err(CatalogError::Configuration(format!(
                "Unknown catalog provider: {}. Supported providers: http, mock",
                provider
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str) -> CatalogConfig {
        CatalogConfig {
            provider: provider.to_string(),
            base_url: "http://localhost:9999".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_factory_mock_succeeds() {
        assert!(CatalogServiceFactory::create(config("mock")).is_ok());
    }

    #[test]
    fn test_factory_http_succeeds() {
        assert!(CatalogServiceFactory::create(config("http")).is_ok());
    }

    #[test]
    fn test_factory_unknown_provider() {
        let err = match CatalogServiceFactory::create(config("smtp")) {
            Err(e) => e,
            Ok(_) => panic!("Expected error for unknown provider"),
        };
        assert!(err.to_string().contains("Unknown catalog provider: smtp"));
    }

    #[test]
    fn test_publication_serializes_tokens() {
        let publication = CatalogPublication {
            inventory_id: Uuid::nil(),
            name: "Ancient Vase".to_string(),
            era: "antiquity".to_string(),
            material: "ceramic".to_string(),
            description: None,
        };

        let json = serde_json::to_value(&publication).unwrap();
        assert_eq!(json["era"], "antiquity");
        assert_eq!(json["material"], "ceramic");
        assert!(json["description"].is_null());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CatalogError::Response("missing public_id".to_string()).to_string(),
            "Catalog response error: missing public_id"
        );
    }
}
