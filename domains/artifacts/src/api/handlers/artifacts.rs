//! Artifact registration API handlers

use antiquarium_common::{Result, ValidatedPath};
use antiquarium_museum::ArtifactDto;
use axum::{extract::State, Json};
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::api::middleware::ArtifactsState;

fn not_nil(id: &Uuid) -> std::result::Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::new("nil_uuid")
            .with_message("inventory id must not be the nil UUID".into()));
    }
    Ok(())
}

/// Path parameters for artifact registration
#[derive(Debug, Deserialize, Validate)]
pub struct InventoryIdPath {
    #[validate(custom(function = "not_nil"))]
    pub inventory_id: Uuid,
}

/// Register an artifact and return its representation
///
/// Served from the local store when present, otherwise fetched from the
/// museum and saved. Admission is re-announced and the catalog re-published
/// on every call.
pub async fn register_artifact(
    State(state): State<ArtifactsState>,
    ValidatedPath(path): ValidatedPath<InventoryIdPath>,
) -> Result<Json<ArtifactDto>> {
    let artifact = state.workflow.register(path.inventory_id).await?;
    Ok(Json(artifact))
}
