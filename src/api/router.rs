use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{attendee, event, health, location, program, program_item, registration, session};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Events
        .route("/api/v1/events", get(event::list_events).post(event::create_event))
        .route("/api/v1/events/{event_id}", get(event::get_event).put(event::update_event).delete(event::delete_event))

        // Locations
        .route("/api/v1/events/{event_id}/locations", get(location::list_locations).post(location::create_location))
        .route("/api/v1/locations/{location_id}", delete(location::delete_location))

        // Program Items
        .route("/api/v1/events/{event_id}/items", get(program_item::list_items).post(program_item::create_item))
        .route("/api/v1/items/{item_id}", get(program_item::get_item).put(program_item::update_item).delete(program_item::delete_item))

        // Sessions
        .route("/api/v1/items/{item_id}/sessions", get(session::list_sessions).post(session::create_session))
        .route("/api/v1/sessions/{session_id}", get(session::get_session).put(session::update_session).delete(session::delete_session))

        // Attendees
        .route("/api/v1/events/{event_id}/attendees", get(attendee::list_attendees).post(attendee::create_attendee))
        .route("/api/v1/attendees/{attendee_id}", delete(attendee::delete_attendee))

        // Registrations
        .route("/api/v1/sessions/{session_id}/registrations", get(registration::list_registrations).post(registration::create_registration))
        .route("/api/v1/sessions/{session_id}/registrations/{attendee_id}", delete(registration::delete_registration))

        // Program Overview
        .route("/api/v1/events/{event_id}/program/overview", get(program::get_program_overview))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
