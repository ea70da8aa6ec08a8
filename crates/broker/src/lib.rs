//! Antiquarium Admission Event Broker
//!
//! Emits admission notifications for newly registered artifacts:
//! - Kafka REST proxy integration for production
//! - Mock broker for testing and development
//! - Configurable proxy URL and topic

pub mod client;
pub mod mock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BrokerError {
    #[error("Broker configuration error: {0}")]
    Configuration(String),

    #[error("Broker request error: {0}")]
    Request(String),

    #[error("Broker response error: {0}")]
    Response(String),
}

/// Admission event payload: the fields downstream consumers care about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionNotification {
    pub inventory_id: Uuid,
    pub name: String,
    pub acquisition_date: NaiveDate,
    pub department: String,
}

/// Broker configuration.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    /// Broker provider (rest-proxy, mock)
    pub provider: String,
    /// Base URL of the Kafka REST proxy
    pub base_url: String,
    /// Topic that receives admission notifications
    pub topic: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl BrokerConfig {
    /// Create broker config from environment variables.
    pub fn from_env() -> Result<Self, BrokerError> {
        let provider = std::env::var("BROKER_PROVIDER").unwrap_or_else(|_| "mock".to_string());

        let base_url =
            std::env::var("BROKER_URL").unwrap_or_else(|_| "http://localhost:8082".to_string());

        let topic = std::env::var("BROKER_NEW_ARTIFACT_QUEUE")
            .unwrap_or_else(|_| "new_artifacts".to_string());

        let timeout_secs = std::env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        if topic.trim().is_empty() {
            return Err(BrokerError::Configuration(
                "BROKER_NEW_ARTIFACT_QUEUE must not be empty".to_string(),
            ));
        }

        Ok(Self {
            provider,
            base_url,
            topic,
            timeout_secs,
        })
    }
}

/// Broker trait for different implementations.
#[async_trait::async_trait]
pub trait BrokerService: Send + Sync {
    /// Publish a single admission notification.
    async fn publish_admission(&self, notification: AdmissionNotification)
        -> Result<(), BrokerError>;
}

/// Factory for creating BrokerService implementations.
pub struct BrokerServiceFactory;

impl BrokerServiceFactory {
    /// Create a BrokerService based on configuration.
    pub fn create(config: BrokerConfig) -> Result<Box<dyn BrokerService>, BrokerError> {
        match config.provider.as_str() {
            "rest-proxy" => {
                tracing::info!(topic = %config.topic, "Creating Kafka REST proxy publisher");
                Ok(Box::new(client::RestProxyPublisher::new(config)?))
            }
            "mock" => {
                tracing::info!("Creating mock broker");
                Ok(Box::new(mock::MockBrokerService::new()))
            }
            provider => Err(BrokerError::Configuration(format!(
                "Unknown broker provider: {}. Supported providers: rest-proxy, mock",
                provider
            ))),
        }
    }
}
