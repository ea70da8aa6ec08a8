//! In-memory artifact store for local runs and tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use antiquarium_common::RepositoryError;

use crate::domain::entities::Artifact;
use crate::repository::ArtifactStore;

/// Thread-safe map keyed by canonical inventory id.
///
/// Counts reads and writes, and can be switched into a failure mode where
/// every operation returns `RepositoryError::Unavailable`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifactStore {
    artifacts: Arc<RwLock<HashMap<String, Artifact>>>,
    failure: Arc<RwLock<Option<String>>>,
    gets: Arc<AtomicUsize>,
    saves: Arc<AtomicUsize>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record without counting it as a save.
    pub fn insert(&self, artifact: Artifact) {
        self.artifacts
            .write()
            .expect("artifacts lock poisoned — prior test panicked")
            .insert(artifact.key(), artifact);
    }

    pub fn with_artifact(self, artifact: Artifact) -> Self {
        self.insert(artifact);
        self
    }

    /// Make every subsequent operation fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self
            .failure
            .write()
            .expect("failure lock poisoned — prior test panicked") = Some(message.into());
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.artifacts
            .read()
            .expect("artifacts lock poisoned — prior test panicked")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_failure(&self) -> Result<(), RepositoryError> {
        let failure = self
            .failure
            .read()
            .map_err(|e| RepositoryError::Unavailable(format!("failure lock poisoned: {e}")))?;
        match failure.as_ref() {
            Some(message) => Err(RepositoryError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn get(&self, inventory_id: &str) -> Result<Option<Artifact>, RepositoryError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let artifacts = self
            .artifacts
            .read()
            .map_err(|e| RepositoryError::Unavailable(format!("artifacts lock poisoned: {e}")))?;
        Ok(artifacts.get(inventory_id).cloned())
    }

    async fn save(&self, artifact: &Artifact) -> Result<(), RepositoryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let mut artifacts = self
            .artifacts
            .write()
            .map_err(|e| RepositoryError::Unavailable(format!("artifacts lock poisoned: {e}")))?;
        let created_at = artifacts
            .get(&artifact.key())
            .map(|existing| existing.created_at);

        let mut record = artifact.clone();
        if let Some(created_at) = created_at {
            record.created_at = created_at;
        }
        artifacts.insert(record.key(), record);
        Ok(())
    }
}
