//! Mock Museum Service Implementation
//!
//! Serves artifacts from an in-memory registry and records every lookup.
//! A configured failure makes every lookup fail with a request error.

use crate::{ArtifactDto, MuseumError, MuseumService};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock museum registry for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct MockMuseumService {
    artifacts: Arc<Mutex<HashMap<String, ArtifactDto>>>,
    failure: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockMuseumService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an artifact, keyed by its canonical inventory id.
    pub fn insert(&self, artifact: ArtifactDto) {
        self.artifacts
            .lock()
            .expect("artifacts lock poisoned — prior test panicked")
            .insert(artifact.inventory_id.to_string(), artifact);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_artifact(self, artifact: ArtifactDto) -> Self {
        self.insert(artifact);
        self
    }

    /// Make every subsequent lookup fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self
            .failure
            .lock()
            .expect("failure lock poisoned — prior test panicked") = Some(message.into());
    }

    /// Inventory ids passed to `fetch_artifact`, in call order.
    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("calls lock poisoned — prior test panicked")
            .clone()
    }

    pub fn reset(&self) {
        self.artifacts.lock().expect("artifacts lock poisoned").clear();
        self.calls.lock().expect("calls lock poisoned").clear();
        *self.failure.lock().expect("failure lock poisoned") = None;
    }
}

#[async_trait::async_trait]
impl MuseumService for MockMuseumService {
    async fn fetch_artifact(&self, inventory_id: &str) -> Result<ArtifactDto, MuseumError> {
        tracing::debug!(inventory_id, "Mock museum: lookup");
        self.calls
            .lock()
            .map_err(|e| MuseumError::Request(format!("calls lock poisoned: {e}")))?
            .push(inventory_id.to_string());

        if let Some(message) = self
            .failure
            .lock()
            .map_err(|e| MuseumError::Request(format!("failure lock poisoned: {e}")))?
            .clone()
        {
            return Err(MuseumError::Request(message));
        }

        self.artifacts
            .lock()
            .map_err(|e| MuseumError::Request(format!("artifacts lock poisoned: {e}")))?
            .get(inventory_id)
            .cloned()
            .ok_or_else(|| MuseumError::NotFound(inventory_id.to_string()))
    }
}
