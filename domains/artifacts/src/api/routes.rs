//! Route definitions for Artifacts domain API

use axum::{routing::get, Router};

use super::handlers::artifacts;
use super::middleware::ArtifactsState;

/// Create all Artifacts domain API routes
pub fn routes() -> Router<ArtifactsState> {
    Router::new().route(
        "/v1/artifacts/{inventory_id}",
        get(artifacts::register_artifact),
    )
}
