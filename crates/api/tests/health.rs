//! HTTP-level test for the root `/health` endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};

#[tokio::test]
async fn test_health_returns_ok() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(&dir.path().join("projects.json"));

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["store_healthy"], true);
}
