//! HTTP handlers for the Artifacts domain

pub mod artifacts;
