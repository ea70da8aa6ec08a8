//! Artifact registration endpoint integration tests

use antiquarium_artifacts::{ArtifactMapper, ArtifactStore, Era, Material};
use antiquarium_museum::ArtifactDto;
use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::{get_request, parse_body, vase_dto, TestApp, NIL_ID, VASE_ID};

fn artifact_uri(id: &str) -> String {
    format!("/v1/artifacts/{id}")
}

async fn register(app: &TestApp, id: &str) -> (StatusCode, Value) {
    let resp = app
        .router()
        .oneshot(get_request(&artifact_uri(id)))
        .await
        .unwrap();
    let status = resp.status();
    (status, parse_body(resp).await)
}

fn assert_error_code(body: &Value, code: &str) {
    assert_eq!(body["error"]["code"], code, "unexpected body: {body}");
    assert!(body["error"]["message"].is_string());
}

mod test_register_artifact {
    use super::*;

    #[tokio::test]
    async fn test_fetched_artifact_returns_200_with_museum_record() {
        let app = TestApp::new();
        app.museum.insert(vase_dto());

        let (status, body) = register(&app, VASE_ID).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "inventory_id": VASE_ID,
                "acquisition_date": "2023-01-01",
                "name": "Ancient Vase",
                "department": "Archaeology",
                "era": "antiquity",
                "material": "ceramic",
                "description": "A beautiful ancient vase"
            })
        );
    }

    #[tokio::test]
    async fn test_fetched_artifact_is_saved_announced_and_published() {
        let app = TestApp::new();
        app.museum.insert(vase_dto());

        register(&app, VASE_ID).await;

        assert_eq!(app.store.save_count(), 1);
        let saved = app.store.get(VASE_ID).await.unwrap().unwrap();
        assert_eq!(saved.era, Era::Antiquity);
        assert_eq!(saved.material, Material::Ceramic);

        let notifications = app.broker.recorded_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].name, "Ancient Vase");

        let publications = app.catalog.recorded_publications();
        assert_eq!(publications.len(), 1);
        assert_eq!(publications[0].era, "antiquity");
        assert_eq!(publications[0].material, "ceramic");
    }

    #[tokio::test]
    async fn test_stored_artifact_served_without_museum() {
        let app = TestApp::new();
        let stored = ArtifactMapper::to_entity(&vase_dto()).unwrap();
        app.store.insert(stored.clone());

        let (status, body) = register(&app, VASE_ID).await;

        assert_eq!(status, StatusCode::OK);
        assert!(app.museum.recorded_calls().is_empty());
        assert_eq!(app.store.save_count(), 0);

        let returned: ArtifactDto = serde_json::from_value(body).unwrap();
        assert_eq!(returned, ArtifactMapper::to_dto(&stored));
        assert!(returned.created_at.is_some());
    }

    #[tokio::test]
    async fn test_repeat_registration_republishes() {
        let app = TestApp::new();
        app.museum.insert(vase_dto());

        let (first, _) = register(&app, VASE_ID).await;
        let (second, _) = register(&app, VASE_ID).await;

        assert_eq!(first, StatusCode::OK);
        assert_eq!(second, StatusCode::OK);
        assert_eq!(app.museum.recorded_calls().len(), 1);
        assert_eq!(app.broker.recorded_notifications().len(), 2);
        assert_eq!(app.catalog.recorded_publications().len(), 2);
    }

    #[tokio::test]
    async fn test_uppercase_id_uses_canonical_key() {
        let id = "a0b1c2d3-e4f5-a6b7-c8d9-e0f1a2b3c4d5";
        let app = TestApp::new();
        app.museum.insert(ArtifactDto {
            inventory_id: id.parse().unwrap(),
            ..vase_dto()
        });

        let (status, body) = register(&app, &id.to_uppercase()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["inventory_id"], id);
        assert_eq!(app.museum.recorded_calls(), vec![id.to_string()]);
    }
}

mod test_error_mapping {
    use super::*;

    #[tokio::test]
    async fn test_unknown_artifact_returns_404() {
        let app = TestApp::new();

        let (status, body) = register(&app, VASE_ID).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_error_code(&body, "NOT_FOUND");
        assert_eq!(app.store.save_count(), 0);
        assert!(app.broker.recorded_notifications().is_empty());
        assert!(app.catalog.recorded_publications().is_empty());
    }

    #[tokio::test]
    async fn test_museum_failure_returns_400() {
        let app = TestApp::new();
        app.museum.fail_with("museum offline");

        let (status, body) = register(&app, VASE_ID).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error_code(&body, "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn test_invalid_material_returns_400_and_saves_nothing() {
        let app = TestApp::new();
        app.museum.insert(ArtifactDto {
            material: "plastic".to_string(),
            ..vase_dto()
        });

        let (status, body) = register(&app, VASE_ID).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error_code(&body, "UPSTREAM_ERROR");
        assert!(app.store.is_empty());
    }

    #[tokio::test]
    async fn test_broker_failure_returns_502_and_keeps_record() {
        let app = TestApp::new();
        app.museum.insert(vase_dto());
        app.broker.fail_with("broker offline");

        let (status, body) = register(&app, VASE_ID).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_error_code(&body, "BAD_GATEWAY");
        assert_eq!(app.store.len(), 1);
        assert!(app.catalog.recorded_publications().is_empty());
    }

    #[tokio::test]
    async fn test_catalog_failure_returns_400_and_keeps_side_effects() {
        let app = TestApp::new();
        app.museum.insert(vase_dto());
        app.catalog.fail_with("catalog unavailable");

        let (status, body) = register(&app, VASE_ID).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error_code(&body, "UPSTREAM_ERROR");
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.broker.recorded_notifications().len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_returns_500() {
        let app = TestApp::new();
        app.museum.insert(vase_dto());
        app.store.fail_with("connection refused");

        let (status, body) = register(&app, VASE_ID).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_error_code(&body, "INTERNAL_ERROR");
        assert!(app.museum.recorded_calls().is_empty());
    }
}

mod test_path_validation {
    use super::*;

    #[tokio::test]
    async fn test_nil_id_returns_400_without_calls() {
        let app = TestApp::new();

        let (status, body) = register(&app, NIL_ID).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error_code(&body, "VALIDATION_ERROR");
        app.assert_untouched();
    }

    #[tokio::test]
    async fn test_malformed_id_returns_400_without_calls() {
        let app = TestApp::new();

        let (status, body) = register(&app, "ancient-vase").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error_code(&body, "VALIDATION_ERROR");
        app.assert_untouched();
    }
}
