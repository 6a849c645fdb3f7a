mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

async fn setup_event(app: &TestApp) -> String {
    let res = app.post("/api/v1/events", &json!({
        "name": "Conference",
        "start_date": "2025-11-10",
        "end_date": "2025-11-12"
    })).await;
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_item_defaults() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;

    let res = app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Intro Talk",
        "required_min": 45
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let item = parse_body(res).await;

    assert_eq!(item["item_type"], "unspecified");
    assert!(item["attendee_limit"].is_null());
    assert!(item["attendee_limit_buffer"].is_null());
    assert_eq!(item["required_min"], 45);
    // Setup/teardown buffers default to 10 minutes.
    assert_eq!(item["before_buffer_min"], 10);
    assert_eq!(item["after_buffer_min"], 10);
}

#[tokio::test]
async fn test_item_requires_positive_duration() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;

    let res = app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Zero Minutes",
        "required_min": 0
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_item_delete_blocked_while_sessions_exist() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;

    let res = app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Workshop", "required_min": 60
    })).await;
    let item_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.post(&format!("/api/v1/items/{}/sessions", item_id), &json!({
        "start_time": "2025-11-10T09:00:00Z"
    })).await;
    let session_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.delete(&format!("/api/v1/items/{}", item_id)).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // After removing the session the item can go.
    let res = app.delete(&format!("/api/v1/sessions/{}", session_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = app.delete(&format!("/api/v1/items/{}", item_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_event_delete_blocked_while_items_exist() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;

    app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Workshop", "required_min": 60
    })).await;

    let res = app.delete(&format!("/api/v1/events/{}", event_id)).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_event_date_invariant() {
    let app = TestApp::new().await;

    let res = app.post("/api/v1/events", &json!({
        "name": "Backwards",
        "start_date": "2025-11-12",
        "end_date": "2025-11-10"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Same rule on update.
    let event_id = setup_event(&app).await;
    let res = app.put(&format!("/api/v1/events/{}", event_id), &json!({
        "end_date": "2025-11-01"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_session_time_window_validation() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;

    let res = app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Workshop", "required_min": 60
    })).await;
    let item_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.post(&format!("/api/v1/items/{}/sessions", item_id), &json!({
        "start_time": "2025-11-10T12:00:00Z",
        "end_time": "2025-11-10T11:00:00Z"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // end_time alone is meaningless.
    let res = app.post(&format!("/api/v1/items/{}/sessions", item_id), &json!({
        "end_time": "2025-11-10T11:00:00Z"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Same rule when updating an unscheduled session.
    let res = app.post(&format!("/api/v1/items/{}/sessions", item_id), &json!({})).await;
    let session_id = parse_body(res).await["id"].as_str().unwrap().to_string();
    let res = app.put(&format!("/api/v1/sessions/{}", session_id), &json!({
        "end_time": "2025-11-10T11:00:00Z"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let session = parse_body(app.get(&format!("/api/v1/sessions/{}", session_id)).await).await;
    assert!(session["end_time"].is_null());
}

#[tokio::test]
async fn test_session_capacity_reduction_below_registrations_conflicts() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;

    let res = app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Workshop", "attendee_limit": 5, "required_min": 60
    })).await;
    let item_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.post(&format!("/api/v1/items/{}/sessions", item_id), &json!({
        "start_time": "2025-11-10T09:00:00Z"
    })).await;
    let session_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    for i in 0..3 {
        let a_res = app.post(&format!("/api/v1/events/{}/attendees", event_id), &json!({
            "email": format!("p{}@example.com", i)
        })).await;
        let attendee_id = parse_body(a_res).await["id"].as_str().unwrap().to_string();
        app.post(&format!("/api/v1/sessions/{}/registrations", session_id), &json!({
            "attendee_id": attendee_id
        })).await;
    }

    let res = app.put(&format!("/api/v1/sessions/{}", session_id), &json!({
        "attendee_limit": 2
    })).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = app.put(&format!("/api/v1/sessions/{}", session_id), &json!({
        "attendee_limit": 3
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_session_status_update() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;

    let res = app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Workshop", "required_min": 60
    })).await;
    let item_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.post(&format!("/api/v1/items/{}/sessions", item_id), &json!({})).await;
    let session = parse_body(res).await;
    assert_eq!(session["status"], "draft");
    let session_id = session["id"].as_str().unwrap().to_string();

    let res = app.put(&format!("/api/v1/sessions/{}", session_id), &json!({
        "status": "cancelled",
        "note": "Speaker ill"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = parse_body(res).await;
    assert_eq!(updated["status"], "cancelled");
    assert_eq!(updated["note"], "Speaker ill");
    assert!(updated["updated_at"].is_string());
}
