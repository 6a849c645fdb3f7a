use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateAttendeeRequest;
use crate::domain::models::attendee::Attendee;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_attendee(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(payload): Json<CreateAttendeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let email = payload.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("Invalid email address".into()));
    }

    // Duplicate email within the event hits the unique index and comes
    // back as 409.
    let attendee = Attendee::new(event.id, email, payload.full_name);
    let created = state.attendee_repo.create(&attendee).await?;
    info!("Created attendee {} for event {}", created.id, event_id);
    Ok(Json(created))
}

pub async fn list_attendees(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let attendees = state.attendee_repo.list_by_event(&event.id).await?;
    Ok(Json(attendees))
}

pub async fn delete_attendee(
    State(state): State<Arc<AppState>>,
    Path(attendee_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.attendee_repo.delete(&attendee_id).await?;
    info!("Deleted attendee {}", attendee_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
