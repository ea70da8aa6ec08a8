//! Mock Broker Implementation
//!
//! Captures admission notifications in memory for test assertions.

use crate::{AdmissionNotification, BrokerError, BrokerService};
use std::sync::{Arc, Mutex};

/// Mock broker that records every notification it is asked to publish.
#[derive(Debug, Clone, Default)]
pub struct MockBrokerService {
    notifications: Arc<Mutex<Vec<AdmissionNotification>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockBrokerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return all successfully published notifications.
    pub fn recorded_notifications(&self) -> Vec<AdmissionNotification> {
        self.notifications
            .lock()
            .expect("notifications lock poisoned — prior test panicked")
            .clone()
    }

    /// Make every subsequent publish fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self
            .failure
            .lock()
            .expect("failure lock poisoned — prior test panicked") = Some(message.into());
    }

    pub fn reset(&self) {
        self.notifications
            .lock()
            .expect("notifications lock poisoned")
            .clear();
        *self.failure.lock().expect("failure lock poisoned") = None;
    }
}

#[async_trait::async_trait]
impl BrokerService for MockBrokerService {
    async fn publish_admission(
        &self,
        notification: AdmissionNotification,
    ) -> Result<(), BrokerError> {
        if let Some(message) = self
            .failure
            .lock()
            .map_err(|e| BrokerError::Request(format!("failure lock poisoned: {e}")))?
            .clone()
        {
            return Err(BrokerError::Request(message));
        }

        tracing::debug!(inventory_id = %notification.inventory_id, "Mock broker: recording notification");
        self.notifications
            .lock()
            .map_err(|e| BrokerError::Request(format!("notifications lock poisoned: {e}")))?
            .push(notification);
        Ok(())
    }
}
