//! Live class API integration tests.
//!
//! Run with: `cargo test -p lectern-api --test live_test`

mod helpers;

use helpers::setup_test_app;

#[tokio::test]
async fn test_start_class_then_join_lists_it() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/live/start")
        .json(&serde_json::json!({
            "subject": "Math",
            "topic": "Fractions",
            "join_link": "https://meet.example.com/abc-defg-hij"
        }))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], serde_json::json!(true));
    assert_eq!(
        body["message"],
        serde_json::json!("Live class started successfully")
    );
    assert_eq!(
        body["join_link"],
        serde_json::json!("https://meet.example.com/abc-defg-hij")
    );
    assert!(body["class_id"].as_str().is_some());

    let join = client.get("/live/join").await;
    assert_eq!(join.status_code(), 200);
    let join_body: serde_json::Value = join.json();
    assert_eq!(join_body["count"], serde_json::json!(1));
    assert_eq!(
        join_body["live_classes"][0]["subject"],
        serde_json::json!("Math")
    );
    assert_eq!(
        join_body["live_classes"][0]["status"],
        serde_json::json!("active")
    );
}

#[tokio::test]
async fn test_join_filters_by_subject() {
    let app = setup_test_app().await;
    let client = app.client();

    for (subject, topic) in [("Math", "Fractions"), ("Science", "Circuits")] {
        let response = client
            .post("/live/start")
            .json(&serde_json::json!({
                "subject": subject,
                "topic": topic,
                "join_link": "https://meet.example.com/room"
            }))
            .await;
        assert_eq!(response.status_code(), 200);
    }

    let math = client
        .get("/live/join")
        .add_query_param("subject", "Math")
        .await;
    let math_body: serde_json::Value = math.json();
    assert_eq!(math_body["count"], serde_json::json!(1));
    assert_eq!(
        math_body["live_classes"][0]["topic"],
        serde_json::json!("Fractions")
    );

    let all = client.get("/live/join").await;
    let all_body: serde_json::Value = all.json();
    assert_eq!(all_body["count"], serde_json::json!(2));
}

#[tokio::test]
async fn test_start_class_requires_all_fields() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/live/start")
        .json(&serde_json::json!({"subject": "Math", "topic": "Fractions"}))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], serde_json::json!(false));
    assert_eq!(
        body["error"],
        serde_json::json!("Subject, topic, and join_link are required")
    );

    // Empty strings count as missing too.
    let response = client
        .post("/live/start")
        .json(&serde_json::json!({
            "subject": "Math",
            "topic": "Fractions",
            "join_link": ""
        }))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_start_class_rejects_malformed_body() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/live/start")
        .json(&serde_json::json!({"subject": 42}))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], serde_json::json!(false));
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}
