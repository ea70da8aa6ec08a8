//! Shared utilities, configuration, and error handling for Antiquarium
//!
//! This crate provides common functionality used across the Antiquarium service:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Repository error type shared by artifact stores
//! - Validating axum extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::{Config, StoreProvider};
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::ValidatedPath;
