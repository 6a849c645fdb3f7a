mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_event_lifecycle() {
    let app = TestApp::new().await;

    let res = app.post("/api/v1/events", &json!({
        "name": "Spring Gathering",
        "description": "Two days in the park",
        "start_date": "2025-04-12",
        "end_date": "2025-04-13"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let event = parse_body(res).await;
    assert_eq!(event["status"], "draft");
    assert!(event["created_at"].is_string());
    assert!(event["updated_at"].is_null());
    let event_id = event["id"].as_str().unwrap().to_string();

    let res = app.get(&format!("/api/v1/events/{}", event_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["name"], "Spring Gathering");

    let res = app.put(&format!("/api/v1/events/{}", event_id), &json!({
        "status": "published"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = parse_body(res).await;
    assert_eq!(updated["status"], "published");
    assert!(updated["updated_at"].is_string());

    let res = app.delete(&format!("/api/v1/events/{}", event_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = app.get(&format!("/api/v1/events/{}", event_id)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_archived_events_drop_out_of_listing() {
    let app = TestApp::new().await;

    for (name, status) in [("Visible Draft", "draft"), ("Visible Published", "published"), ("Hidden", "archived")] {
        let res = app.post("/api/v1/events", &json!({
            "name": name,
            "start_date": "2025-04-01",
            "end_date": "2025-04-02",
            "status": status
        })).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = app.get("/api/v1/events").await;
    let events = parse_body(res).await;
    let names: Vec<&str> = events.as_array().unwrap().iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(!names.contains(&"Hidden"));
}

#[tokio::test]
async fn test_unknown_status_rejected() {
    let app = TestApp::new().await;

    let res = app.post("/api/v1/events", &json!({
        "name": "Bad Status",
        "start_date": "2025-04-01",
        "end_date": "2025-04-02",
        "status": "cancelled"
    })).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let res = app.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "ok");
}
