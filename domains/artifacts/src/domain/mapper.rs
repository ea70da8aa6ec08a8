//! Conversions between the museum wire shape, the entity and the outbound
//! projections.

use antiquarium_broker::AdmissionNotification;
use antiquarium_catalog::CatalogPublication;
use antiquarium_museum::ArtifactDto;
use chrono::Utc;

use crate::domain::entities::Artifact;
use crate::domain::identifier::InventoryId;
use crate::domain::values::{Era, Material, ValueObjectError};

pub struct ArtifactMapper;

impl ArtifactMapper {
    /// Map a museum record into the local value model.
    ///
    /// Fails on an era or material outside the closed sets, a nil id, or a
    /// blank name/department. `created_at` is always stamped with now; the
    /// museum's own timestamp is not the local persistence time.
    pub fn to_entity(dto: &ArtifactDto) -> Result<Artifact, ValueObjectError> {
        Artifact::new(
            InventoryId::try_from(dto.inventory_id)?,
            Utc::now(),
            dto.acquisition_date,
            dto.name.clone(),
            dto.department.clone(),
            dto.era.parse::<Era>()?,
            dto.material.parse::<Material>()?,
            dto.description.clone(),
        )
    }

    pub fn to_dto(artifact: &Artifact) -> ArtifactDto {
        ArtifactDto {
            inventory_id: artifact.inventory_id.as_uuid(),
            created_at: Some(artifact.created_at),
            acquisition_date: artifact.acquisition_date,
            name: artifact.name.clone(),
            department: artifact.department.clone(),
            era: artifact.era.as_str().to_string(),
            material: artifact.material.as_str().to_string(),
            description: artifact.description.clone(),
        }
    }

    pub fn to_notification(artifact: &Artifact) -> AdmissionNotification {
        AdmissionNotification {
            inventory_id: artifact.inventory_id.as_uuid(),
            name: artifact.name.clone(),
            acquisition_date: artifact.acquisition_date,
            department: artifact.department.clone(),
        }
    }

    pub fn to_publication(artifact: &Artifact) -> CatalogPublication {
        CatalogPublication {
            inventory_id: artifact.inventory_id.as_uuid(),
            name: artifact.name.clone(),
            era: artifact.era.as_str().to_string(),
            material: artifact.material.as_str().to_string(),
            description: artifact.description.clone(),
        }
    }
}
