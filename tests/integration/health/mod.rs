//! Infrastructure route tests

use axum::http::StatusCode;
use tower::ServiceExt;

use crate::common::{get_request, TestApp};

#[tokio::test]
async fn test_health_returns_ok() {
    let app = TestApp::new();

    let resp = app.router().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::new();

    let resp = app
        .router()
        .oneshot(get_request("/v1/exhibits"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
