//! Repository implementations for Artifacts domain

pub mod artifacts;
pub mod memory;

use antiquarium_common::RepositoryError;

use crate::domain::entities::Artifact;

pub use artifacts::ArtifactRepository;
pub use memory::InMemoryArtifactStore;

/// Local persistence for artifacts, keyed by canonical inventory id.
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn get(&self, inventory_id: &str) -> Result<Option<Artifact>, RepositoryError>;

    /// Insert or overwrite; concurrent saves of one id resolve last-write-wins.
    async fn save(&self, artifact: &Artifact) -> Result<(), RepositoryError>;
}
