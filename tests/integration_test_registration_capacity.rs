mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

async fn setup_event(app: &TestApp) -> String {
    let res = app.post("/api/v1/events", &json!({
        "name": "Maker Faire",
        "start_date": "2025-09-01",
        "end_date": "2025-09-02"
    })).await;
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn setup_attendee(app: &TestApp, event_id: &str, email: &str) -> String {
    let res = app.post(&format!("/api/v1/events/{}/attendees", event_id), &json!({
        "email": email,
        "full_name": "Test Attendee"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_registration_respects_limit_plus_buffer() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;

    let item_res = app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Soldering 101",
        "item_type": "workshop",
        "attendee_limit": 2,
        "attendee_limit_buffer": 1,
        "required_min": 90
    })).await;
    let item_id = parse_body(item_res).await["id"].as_str().unwrap().to_string();

    let session_res = app.post(&format!("/api/v1/items/{}/sessions", item_id), &json!({
        "start_time": "2025-09-01T10:00:00Z",
        "end_time": "2025-09-01T11:30:00Z"
    })).await;
    let session_id = parse_body(session_res).await["id"].as_str().unwrap().to_string();

    // Limit 2 + buffer 1 = 3 registrations allowed.
    for i in 0..3 {
        let attendee_id = setup_attendee(&app, &event_id, &format!("maker{}@example.com", i)).await;
        let res = app.post(&format!("/api/v1/sessions/{}/registrations", session_id), &json!({
            "attendee_id": attendee_id
        })).await;
        assert_eq!(res.status(), StatusCode::OK, "registration {} should succeed", i);
    }

    let attendee_id = setup_attendee(&app, &event_id, "overflow@example.com").await;
    let res = app.post(&format!("/api/v1/sessions/{}/registrations", session_id), &json!({
        "attendee_id": attendee_id
    })).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // Nothing was persisted for the rejected registration.
    let regs = parse_body(app.get(&format!("/api/v1/sessions/{}/registrations", session_id)).await).await;
    assert_eq!(regs.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_session_override_tightens_capacity() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;

    let item_res = app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Big Lecture",
        "item_type": "lecture",
        "attendee_limit": 100,
        "required_min": 60
    })).await;
    let item_id = parse_body(item_res).await["id"].as_str().unwrap().to_string();

    // The override caps this occurrence at 1 despite the item's 100.
    let session_res = app.post(&format!("/api/v1/items/{}/sessions", item_id), &json!({
        "start_time": "2025-09-01T14:00:00Z",
        "attendee_limit": 1
    })).await;
    let session_id = parse_body(session_res).await["id"].as_str().unwrap().to_string();

    let first = setup_attendee(&app, &event_id, "one@example.com").await;
    let res = app.post(&format!("/api/v1/sessions/{}/registrations", session_id), &json!({
        "attendee_id": first
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let second = setup_attendee(&app, &event_id, "two@example.com").await;
    let res = app.post(&format!("/api/v1/sessions/{}/registrations", session_id), &json!({
        "attendee_id": second
    })).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unlimited_item_accepts_registrations() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;

    // No attendee_limit anywhere: unlimited.
    let item_res = app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Open Stage",
        "required_min": 30
    })).await;
    let item_id = parse_body(item_res).await["id"].as_str().unwrap().to_string();

    let session_res = app.post(&format!("/api/v1/items/{}/sessions", item_id), &json!({
        "start_time": "2025-09-01T18:00:00Z"
    })).await;
    let session_id = parse_body(session_res).await["id"].as_str().unwrap().to_string();

    for i in 0..10 {
        let attendee_id = setup_attendee(&app, &event_id, &format!("guest{}@example.com", i)).await;
        let res = app.post(&format!("/api/v1/sessions/{}/registrations", session_id), &json!({
            "attendee_id": attendee_id
        })).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;

    let item_res = app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Workshop", "attendee_limit": 5, "required_min": 60
    })).await;
    let item_id = parse_body(item_res).await["id"].as_str().unwrap().to_string();

    let session_res = app.post(&format!("/api/v1/items/{}/sessions", item_id), &json!({
        "start_time": "2025-09-01T10:00:00Z"
    })).await;
    let session_id = parse_body(session_res).await["id"].as_str().unwrap().to_string();

    let attendee_id = setup_attendee(&app, &event_id, "dup@example.com").await;

    let res = app.post(&format!("/api/v1/sessions/{}/registrations", session_id), &json!({
        "attendee_id": attendee_id
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.post(&format!("/api/v1/sessions/{}/registrations", session_id), &json!({
        "attendee_id": attendee_id
    })).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_cross_event_registration_rejected() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;

    let other_res = app.post("/api/v1/events", &json!({
        "name": "Other Event",
        "start_date": "2025-10-01",
        "end_date": "2025-10-02"
    })).await;
    let other_event_id = parse_body(other_res).await["id"].as_str().unwrap().to_string();

    let item_res = app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Workshop", "required_min": 60
    })).await;
    let item_id = parse_body(item_res).await["id"].as_str().unwrap().to_string();

    let session_res = app.post(&format!("/api/v1/items/{}/sessions", item_id), &json!({})).await;
    let session_id = parse_body(session_res).await["id"].as_str().unwrap().to_string();

    let stranger = setup_attendee(&app, &other_event_id, "stranger@example.com").await;
    let res = app.post(&format!("/api/v1/sessions/{}/registrations", session_id), &json!({
        "attendee_id": stranger
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_registration_unknown_session_or_attendee() {
    let app = TestApp::new().await;
    let event_id = setup_event(&app).await;
    let attendee_id = setup_attendee(&app, &event_id, "real@example.com").await;

    let res = app.post("/api/v1/sessions/no-such-session/registrations", &json!({
        "attendee_id": attendee_id
    })).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let item_res = app.post(&format!("/api/v1/events/{}/items", event_id), &json!({
        "name": "Workshop", "required_min": 60
    })).await;
    let item_id = parse_body(item_res).await["id"].as_str().unwrap().to_string();
    let session_res = app.post(&format!("/api/v1/items/{}/sessions", item_id), &json!({})).await;
    let session_id = parse_body(session_res).await["id"].as_str().unwrap().to_string();

    let res = app.post(&format!("/api/v1/sessions/{}/registrations", session_id), &json!({
        "attendee_id": "no-such-attendee"
    })).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
