//! Health, index, and docs endpoint tests.
//!
//! Run with: `cargo test -p lectern-api --test health_test`

mod helpers;

use helpers::setup_test_app;

#[tokio::test]
async fn test_health_reports_connected_database() {
    let app = setup_test_app().await;
    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], serde_json::json!("ok"));
    assert_eq!(body["database"], serde_json::json!("connected"));
}

#[tokio::test]
async fn test_index_describes_the_api() {
    let app = setup_test_app().await;
    let response = app.client().get("/").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], serde_json::json!("Lectern Backend API"));
    assert_eq!(body["version"], serde_json::json!("1.0.0"));
    assert_eq!(body["endpoints"]["teacher"].as_array().unwrap().len(), 1);
    assert_eq!(body["endpoints"]["student"].as_array().unwrap().len(), 2);
    assert_eq!(body["endpoints"]["live"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_openapi_spec_is_served() {
    let app = setup_test_app().await;
    let response = app.client().get("/api/openapi.json").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["info"]["title"], serde_json::json!("Lectern API"));
    assert!(body["paths"].get("/teacher/upload").is_some());
    assert!(body["paths"].get("/auth/student/signup").is_some());
}
