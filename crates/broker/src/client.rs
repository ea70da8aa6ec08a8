//! Kafka REST Proxy Publisher
//!
//! POSTs records to `{base_url}/topics/{topic}` using the REST proxy v2
//! JSON embedded format. The inventory id is used as the record key so all
//! events for one artifact land on the same partition.

use std::time::Duration;

use serde::Serialize;

use crate::{AdmissionNotification, BrokerConfig, BrokerError, BrokerService};

const CONTENT_TYPE: &str = "application/vnd.kafka.json.v2+json";

#[derive(Debug, Serialize)]
struct ProduceRequest<'a> {
    records: Vec<ProduceRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct ProduceRecord<'a> {
    key: String,
    value: &'a AdmissionNotification,
}

/// Publishes admission notifications through a Kafka REST proxy.
pub struct RestProxyPublisher {
    http: reqwest::Client,
    topic_url: String,
}

impl RestProxyPublisher {
    pub fn new(config: BrokerConfig) -> Result<Self, BrokerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BrokerError::Configuration(e.to_string()))?;
        let topic_url = format!(
            "{}/topics/{}",
            config.base_url.trim_end_matches('/'),
            config.topic
        );
        Ok(Self { http, topic_url })
    }
}

#[async_trait::async_trait]
impl BrokerService for RestProxyPublisher {
    async fn publish_admission(
        &self,
        notification: AdmissionNotification,
    ) -> Result<(), BrokerError> {
        let body = ProduceRequest {
            records: vec![ProduceRecord {
                key: notification.inventory_id.to_string(),
                value: &notification,
            }],
        };

        let response = self
            .http
            .post(&self.topic_url)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE)
            .json(&body)
            .send()
            .await
            .map_err(|e| BrokerError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(BrokerError::Response(format!(
                "REST proxy returned {}: {}",
                status, body
            )));
        }

        tracing::debug!(
            inventory_id = %notification.inventory_id,
            "Admission notification published"
        );
        Ok(())
    }
}
