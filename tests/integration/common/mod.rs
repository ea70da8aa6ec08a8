//! Common test utilities and fixtures for integration tests
//!
//! - Router wired to mock services and the in-memory store
//! - Museum record fixtures
//! - Request and response helpers

use std::sync::Arc;

use antiquarium_artifacts::{ArtifactsState, InMemoryArtifactStore, RegistrationWorkflow};
use antiquarium_broker::mock::MockBrokerService;
use antiquarium_catalog::mock::MockCatalogService;
use antiquarium_museum::{mock::MockMuseumService, ArtifactDto};
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use uuid::Uuid;

pub const VASE_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const NIL_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Test application: the real router plus handles on every collaborator
pub struct TestApp {
    pub store: InMemoryArtifactStore,
    pub museum: MockMuseumService,
    pub broker: MockBrokerService,
    pub catalog: MockCatalogService,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            store: InMemoryArtifactStore::new(),
            museum: MockMuseumService::new(),
            broker: MockBrokerService::new(),
            catalog: MockCatalogService::new(),
        }
    }

    /// Build a fresh router sharing this app's collaborators
    pub fn router(&self) -> Router {
        let workflow = RegistrationWorkflow::new(
            Arc::new(self.store.clone()),
            Arc::new(self.museum.clone()),
            Arc::new(self.broker.clone()),
            Arc::new(self.catalog.clone()),
        );
        antiquarium_app::router(ArtifactsState::new(workflow))
    }

    /// Nothing downstream of the path validation was touched
    pub fn assert_untouched(&self) {
        assert_eq!(self.store.get_count(), 0);
        assert!(self.museum.recorded_calls().is_empty());
        assert!(self.broker.recorded_notifications().is_empty());
        assert!(self.catalog.recorded_publications().is_empty());
    }
}

/// The canonical museum record used across tests
pub fn vase_dto() -> ArtifactDto {
    ArtifactDto {
        inventory_id: Uuid::parse_str(VASE_ID).unwrap(),
        created_at: None,
        acquisition_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        name: "Ancient Vase".to_string(),
        department: "Archaeology".to_string(),
        era: "antiquity".to_string(),
        material: "ceramic".to_string(),
        description: Some("A beautiful ancient vase".to_string()),
    }
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Parse response body as JSON Value
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
