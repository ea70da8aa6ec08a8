//! Artifact registration workflow
//!
//! Looks the artifact up locally, otherwise fetches it from the museum and
//! saves it, then notifies the broker and publishes to the catalog. Each step
//! has its own failure variant; earlier side effects are never compensated.

use std::convert::Infallible;
use std::sync::Arc;

use antiquarium_broker::{BrokerError, BrokerService};
use antiquarium_catalog::{CatalogError, CatalogService};
use antiquarium_common::RepositoryError;
use antiquarium_museum::{ArtifactDto, MuseumError, MuseumService};
use thiserror::Error;

use crate::domain::entities::Artifact;
use crate::domain::identifier::{IdentifierError, InventoryId};
use crate::domain::mapper::ArtifactMapper;
use crate::domain::state::{
    RegistrationEvent, RegistrationState, RegistrationStateMachine, StateError,
};
use crate::domain::values::ValueObjectError;
use crate::repository::ArtifactStore;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Invalid inventory id: {0}")]
    InvalidIdentifier(#[from] IdentifierError),

    #[error("Artifact {0} not found")]
    ArtifactNotFound(String),

    #[error("Failed to fetch artifact from museum: {0}")]
    SourceFetchFailed(#[source] MuseumError),

    #[error("Failed to persist artifact: {0}")]
    PersistenceFailed(#[source] RepositoryError),

    #[error("Failed to publish admission notification: {0}")]
    NotificationFailed(#[source] BrokerError),

    #[error("Failed to publish artifact to catalog: {0}")]
    CatalogPublishFailed(#[source] CatalogError),

    #[error("Museum record is invalid: {0}")]
    InvalidEraOrMaterial(#[source] ValueObjectError),

    #[error("Registration state error: {0}")]
    State(#[from] StateError),
}

impl From<Infallible> for RegistrationError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<RegistrationError> for antiquarium_common::Error {
    fn from(err: RegistrationError) -> Self {
        use antiquarium_common::Error as AppError;

        match err {
            RegistrationError::InvalidIdentifier(e) => AppError::Validation(e.to_string()),
            RegistrationError::ArtifactNotFound(_) => AppError::NotFound(err.to_string()),
            RegistrationError::SourceFetchFailed(_)
            | RegistrationError::CatalogPublishFailed(_)
            | RegistrationError::InvalidEraOrMaterial(_) => AppError::Upstream(err.to_string()),
            RegistrationError::NotificationFailed(_) => AppError::BadGateway(err.to_string()),
            RegistrationError::PersistenceFailed(_) | RegistrationError::State(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

/// Tracks one run through the registration state machine.
struct Run {
    key: String,
    state: RegistrationState,
}

impl Run {
    fn new(key: String) -> Self {
        Self {
            key,
            state: RegistrationState::Start,
        }
    }

    fn advance(&mut self, event: RegistrationEvent) -> Result<(), StateError> {
        let next = RegistrationStateMachine::transition(self.state, event)?;
        tracing::debug!(
            inventory_id = %self.key,
            from = %self.state,
            to = %next,
            %event,
            "Registration state transition"
        );
        self.state = next;
        Ok(())
    }

    /// Move into the failure state for `event` and hand back `error`.
    fn fail(&mut self, event: RegistrationEvent, error: RegistrationError) -> RegistrationError {
        match self.advance(event) {
            Ok(()) => error,
            Err(e) => e.into(),
        }
    }
}

/// Coordinates the local store, the museum, the broker and the catalog.
pub struct RegistrationWorkflow {
    store: Arc<dyn ArtifactStore>,
    museum: Arc<dyn MuseumService>,
    broker: Arc<dyn BrokerService>,
    catalog: Arc<dyn CatalogService>,
}

impl RegistrationWorkflow {
    pub fn new(
        store: Arc<dyn ArtifactStore>,
        museum: Arc<dyn MuseumService>,
        broker: Arc<dyn BrokerService>,
        catalog: Arc<dyn CatalogService>,
    ) -> Self {
        Self {
            store,
            museum,
            broker,
            catalog,
        }
    }

    /// Register the artifact with the given inventory id.
    ///
    /// Accepts a string, a `Uuid` or an `InventoryId`. A freshly fetched
    /// artifact is returned exactly as the museum sent it; a stored one is
    /// rendered from the entity. A stored artifact is re-notified and
    /// re-published on every call.
    pub async fn register<I>(&self, inventory_id: I) -> Result<ArtifactDto, RegistrationError>
    where
        I: TryInto<InventoryId>,
        I::Error: Into<RegistrationError>,
    {
        let id: InventoryId = inventory_id.try_into().map_err(Into::into)?;
        let mut run = Run::new(id.key());

        tracing::info!(inventory_id = %run.key, "Registering artifact");
        let result = self.execute(&mut run).await;

        match &result {
            Ok(_) => tracing::info!(
                inventory_id = %run.key,
                state = %run.state,
                "Artifact registration completed"
            ),
            Err(e) => tracing::warn!(
                inventory_id = %run.key,
                state = %run.state,
                error = %e,
                "Artifact registration failed"
            ),
        }
        result
    }

    async fn execute(&self, run: &mut Run) -> Result<ArtifactDto, RegistrationError> {
        let stored = match self.store.get(&run.key).await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::error!(inventory_id = %run.key, error = %e, "Artifact store lookup failed");
                return Err(run.fail(
                    RegistrationEvent::LookupError,
                    RegistrationError::PersistenceFailed(e),
                ));
            }
        };

        let (artifact, response) = match stored {
            Some(artifact) => {
                run.advance(RegistrationEvent::LookupHit)?;
                run.advance(RegistrationEvent::Notify)?;
                let response = ArtifactMapper::to_dto(&artifact);
                (artifact, response)
            }
            None => {
                run.advance(RegistrationEvent::LookupMiss)?;
                tracing::info!(
                    inventory_id = %run.key,
                    "Artifact not in local store, fetching from museum"
                );
                self.fetch_and_save(run).await?
            }
        };

        self.notify(run, &artifact).await?;
        self.publish(run, &artifact).await?;

        Ok(response)
    }

    async fn fetch_and_save(
        &self,
        run: &mut Run,
    ) -> Result<(Artifact, ArtifactDto), RegistrationError> {
        let dto = match self.museum.fetch_artifact(&run.key).await {
            Ok(dto) if dto.inventory_id.hyphenated().to_string() != run.key => {
                tracing::error!(
                    inventory_id = %run.key,
                    returned_id = %dto.inventory_id,
                    "Museum returned a different artifact"
                );
                let error = MuseumError::Response(format!(
                    "requested artifact {} but museum returned {}",
                    run.key, dto.inventory_id
                ));
                return Err(run.fail(
                    RegistrationEvent::FetchError,
                    RegistrationError::SourceFetchFailed(error),
                ));
            }
            Ok(dto) => {
                run.advance(RegistrationEvent::FetchOk)?;
                dto
            }
            Err(MuseumError::NotFound(_)) => {
                let error = RegistrationError::ArtifactNotFound(run.key.clone());
                return Err(run.fail(RegistrationEvent::FetchNotFound, error));
            }
            Err(e) => {
                tracing::error!(inventory_id = %run.key, error = %e, "Museum lookup failed");
                return Err(run.fail(
                    RegistrationEvent::FetchError,
                    RegistrationError::SourceFetchFailed(e),
                ));
            }
        };

        let artifact = match ArtifactMapper::to_entity(&dto) {
            Ok(artifact) => {
                run.advance(RegistrationEvent::MapOk)?;
                artifact
            }
            Err(e) => {
                tracing::error!(inventory_id = %run.key, error = %e, "Museum record rejected");
                return Err(run.fail(
                    RegistrationEvent::MapError,
                    RegistrationError::InvalidEraOrMaterial(e),
                ));
            }
        };

        if let Err(e) = self.store.save(&artifact).await {
            tracing::error!(inventory_id = %run.key, error = %e, "Failed to save artifact");
            return Err(run.fail(
                RegistrationEvent::SaveError,
                RegistrationError::PersistenceFailed(e),
            ));
        }
        run.advance(RegistrationEvent::SaveOk)?;

        Ok((artifact, dto))
    }

    async fn notify(&self, run: &mut Run, artifact: &Artifact) -> Result<(), RegistrationError> {
        let notification = ArtifactMapper::to_notification(artifact);
        if let Err(e) = self.broker.publish_admission(notification).await {
            tracing::warn!(
                inventory_id = %run.key,
                error = %e,
                "Admission notification failed; artifact stays registered"
            );
            return Err(run.fail(
                RegistrationEvent::NotifyError,
                RegistrationError::NotificationFailed(e),
            ));
        }
        run.advance(RegistrationEvent::NotifyOk)?;
        Ok(())
    }

    async fn publish(&self, run: &mut Run, artifact: &Artifact) -> Result<(), RegistrationError> {
        let publication = ArtifactMapper::to_publication(artifact);
        match self.catalog.publish_artifact(publication).await {
            Ok(public_id) => {
                run.advance(RegistrationEvent::PublishOk)?;
                tracing::info!(
                    inventory_id = %run.key,
                    public_id = %public_id,
                    "Artifact published to catalog"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(inventory_id = %run.key, error = %e, "Catalog publish failed");
                Err(run.fail(
                    RegistrationEvent::PublishError,
                    RegistrationError::CatalogPublishFailed(e),
                ))
            }
        }
    }
}
