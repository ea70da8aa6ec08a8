//! Mock Catalog Service Implementation
//!
//! Records publications in memory and hands out sequential public ids.

use crate::{CatalogError, CatalogPublication, CatalogService};
use std::sync::{Arc, Mutex};

/// Mock catalog that records publications for test assertions.
#[derive(Debug, Clone, Default)]
pub struct MockCatalogService {
    publications: Arc<Mutex<Vec<CatalogPublication>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockCatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return all recorded publications, including attempts that were failed on purpose.
    pub fn recorded_publications(&self) -> Vec<CatalogPublication> {
        self.publications
            .lock()
            .expect("publications lock poisoned — prior test panicked")
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
        self.publications
            .lock()
            .expect("publications lock poisoned")
            .clear();
        *self.failure.lock().expect("failure lock poisoned") = None;
    }
}

#[async_trait::async_trait]
impl CatalogService for MockCatalogService {
    async fn publish_artifact(
        &self,
        publication: CatalogPublication,
    ) -> Result<String, CatalogError> {
        tracing::debug!(inventory_id = %publication.inventory_id, "Mock catalog: recording publication");
        let mut publications = self
            .publications
            .lock()
            .map_err(|e| CatalogError::Request(format!("publications lock poisoned: {e}")))?;
        publications.push(publication);

        if let Some(message) = self
            .failure
            .lock()
            .map_err(|e| CatalogError::Request(format!("failure lock poisoned: {e}")))?
            .clone()
        {
            return Err(CatalogError::Response(message));
        }

        Ok(format!("mock-public-{}", publications.len()))
    }
}
