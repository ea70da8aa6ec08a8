//! Artifacts domain: museum artifact registration

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::Artifact;
pub use domain::identifier::{IdentifierError, InventoryId};
pub use domain::mapper::ArtifactMapper;
pub use domain::registration::{RegistrationError, RegistrationWorkflow};
pub use domain::state::{
    RegistrationEvent, RegistrationState, RegistrationStateMachine, StateError,
};
pub use domain::values::{Era, Material, ValueObjectError};

// Re-export repository types
pub use repository::{ArtifactRepository, ArtifactStore, InMemoryArtifactStore};

// Re-export API types
pub use api::routes;
pub use api::ArtifactsState;
