//! Domain layer for the Artifacts domain

pub mod entities;
pub mod identifier;
pub mod mapper;
pub mod registration;
pub mod state;
pub mod values;
