//! Inventory identifier value object
//!
//! A UUID that is never the nil sentinel. Every store and client call is keyed
//! by the canonical lowercase hyphenated form, whatever form the caller used.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Inventory id is not a valid UUID: {0}")]
    Malformed(String),

    #[error("Inventory id must not be the nil UUID")]
    Nil,
}

/// Globally unique, non-nil artifact inventory identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct InventoryId(Uuid);

impl InventoryId {
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Canonical store/client key: lowercase, hyphenated.
    pub fn key(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

impl TryFrom<Uuid> for InventoryId {
    type Error = IdentifierError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        if value.is_nil() {
            return Err(IdentifierError::Nil);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for InventoryId {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(value.trim())
            .map_err(|_| IdentifierError::Malformed(value.to_string()))?;
        Self::try_from(uuid)
    }
}

impl TryFrom<String> for InventoryId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&String> for InventoryId {
    type Error = IdentifierError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl FromStr for InventoryId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<InventoryId> for Uuid {
    fn from(id: InventoryId) -> Self {
        id.0
    }
}

impl std::fmt::Display for InventoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
