//! Closed-set value objects for artifact classification
//!
//! `Era` and `Material` are only constructed from their exact lowercase
//! tokens. Ordering is lexical on the token, not declaration order.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::identifier::IdentifierError;

/// Errors raised while building value objects or entities from raw input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    #[error("Invalid era: {0}")]
    InvalidEra(String),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    #[error("Field '{0}' must not be blank")]
    BlankField(&'static str),
}

/// Historical era of an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    Paleolithic,
    Neolithic,
    BronzeAge,
    IronAge,
    Antiquity,
    MiddleAges,
    Modern,
}

impl Era {
    pub const ALL: [Era; 7] = [
        Era::Paleolithic,
        Era::Neolithic,
        Era::BronzeAge,
        Era::IronAge,
        Era::Antiquity,
        Era::MiddleAges,
        Era::Modern,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Era::Paleolithic => "paleolithic",
            Era::Neolithic => "neolithic",
            Era::BronzeAge => "bronze_age",
            Era::IronAge => "iron_age",
            Era::Antiquity => "antiquity",
            Era::MiddleAges => "middle_ages",
            Era::Modern => "modern",
        }
    }
}

impl FromStr for Era {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Era::ALL
            .into_iter()
            .find(|era| era.as_str() == s)
            .ok_or_else(|| ValueObjectError::InvalidEra(s.to_string()))
    }
}

impl TryFrom<&str> for Era {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Ord for Era {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Era {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary material of an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Ceramic,
    Metal,
    Stone,
    Glass,
    Bone,
    Wood,
    Textile,
    Other,
}

impl Material {
    pub const ALL: [Material; 8] = [
        Material::Ceramic,
        Material::Metal,
        Material::Stone,
        Material::Glass,
        Material::Bone,
        Material::Wood,
        Material::Textile,
        Material::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Ceramic => "ceramic",
            Material::Metal => "metal",
            Material::Stone => "stone",
            Material::Glass => "glass",
            Material::Bone => "bone",
            Material::Wood => "wood",
            Material::Textile => "textile",
            Material::Other => "other",
        }
    }
}

impl FromStr for Material {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Material::ALL
            .into_iter()
            .find(|material| material.as_str() == s)
            .ok_or_else(|| ValueObjectError::InvalidMaterial(s.to_string()))
    }
}

impl TryFrom<&str> for Material {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Ord for Material {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Material {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
