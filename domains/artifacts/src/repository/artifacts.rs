//! Postgres artifact repository

use antiquarium_common::RepositoryError;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Artifact;
use crate::domain::identifier::InventoryId;
use crate::domain::values::{Era, Material, ValueObjectError};
use crate::repository::ArtifactStore;

/// All columns in the artifacts table, used for SELECT and INSERT clauses.
const ARTIFACT_COLUMNS: &str = "\
    inventory_id, created_at, acquisition_date, \
    name, department, era, material, description";

/// Raw row; era and material are re-validated on the way out.
#[derive(Debug, sqlx::FromRow)]
struct ArtifactRow {
    inventory_id: Uuid,
    created_at: DateTime<Utc>,
    acquisition_date: NaiveDate,
    name: String,
    department: String,
    era: String,
    material: String,
    description: Option<String>,
}

impl TryFrom<ArtifactRow> for Artifact {
    type Error = RepositoryError;

    fn try_from(row: ArtifactRow) -> Result<Self, Self::Error> {
        let id = row.inventory_id;
        let invalid =
            |e: ValueObjectError| RepositoryError::InvalidData(format!("artifact {id}: {e}"));

        Artifact::new(
            InventoryId::try_from(id).map_err(|e| invalid(e.into()))?,
            row.created_at,
            row.acquisition_date,
            row.name,
            row.department,
            row.era.parse::<Era>().map_err(invalid)?,
            row.material.parse::<Material>().map_err(invalid)?,
            row.description,
        )
        .map_err(invalid)
    }
}

#[derive(Clone)]
pub struct ArtifactRepository {
    pool: PgPool,
}

impl ArtifactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ArtifactStore for ArtifactRepository {
    async fn get(&self, inventory_id: &str) -> Result<Option<Artifact>, RepositoryError> {
        let id = Uuid::parse_str(inventory_id)
            .map_err(|e| RepositoryError::InvalidData(format!("inventory id {inventory_id}: {e}")))?;

        let query = format!("SELECT {ARTIFACT_COLUMNS} FROM artifacts WHERE inventory_id = $1");
        let row = sqlx::query_as::<_, ArtifactRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Artifact::try_from).transpose()
    }

    async fn save(&self, artifact: &Artifact) -> Result<(), RepositoryError> {
        let query = format!(
            "INSERT INTO artifacts ({ARTIFACT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (inventory_id) DO UPDATE SET \
             acquisition_date = EXCLUDED.acquisition_date, \
             name = EXCLUDED.name, \
             department = EXCLUDED.department, \
             era = EXCLUDED.era, \
             material = EXCLUDED.material, \
             description = EXCLUDED.description"
        );
        sqlx::query(&query)
            .bind(artifact.inventory_id.as_uuid())
            .bind(artifact.created_at)
            .bind(artifact.acquisition_date)
            .bind(&artifact.name)
            .bind(&artifact.department)
            .bind(artifact.era.as_str())
            .bind(artifact.material.as_str())
            .bind(&artifact.description)
            .execute(&self.pool)
            .await?;

        tracing::debug!(inventory_id = %artifact.inventory_id, "Artifact saved");
        Ok(())
    }
}
