//! Domain entities for the Artifacts domain

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::identifier::InventoryId;
use crate::domain::values::{Era, Material, ValueObjectError};

/// Artifact entity
///
/// Built either by mapping a museum record or by loading a stored row; both
/// paths go through [`Artifact::new`], so name and department are never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub inventory_id: InventoryId,
    /// Assigned on first local persistence
    pub created_at: DateTime<Utc>,
    pub acquisition_date: NaiveDate,
    pub name: String,
    pub department: String,
    pub era: Era,
    pub material: Material,
    pub description: Option<String>,
}

impl Artifact {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        inventory_id: InventoryId,
        created_at: DateTime<Utc>,
        acquisition_date: NaiveDate,
        name: impl Into<String>,
        department: impl Into<String>,
        era: Era,
        material: Material,
        description: Option<String>,
    ) -> Result<Self, ValueObjectError> {
        let artifact = Self {
            inventory_id,
            created_at,
            acquisition_date,
            name: name.into(),
            department: department.into(),
            era,
            material,
            description,
        };
        artifact.validate()?;
        Ok(artifact)
    }

    /// Validate artifact business rules
    pub fn validate(&self) -> Result<(), ValueObjectError> {
        if self.name.trim().is_empty() {
            return Err(ValueObjectError::BlankField("name"));
        }
        if self.department.trim().is_empty() {
            return Err(ValueObjectError::BlankField("department"));
        }
        Ok(())
    }

    /// Canonical key used for store lookups
    pub fn key(&self) -> String {
        self.inventory_id.key()
    }
}
