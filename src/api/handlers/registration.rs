use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateRegistrationRequest;
use crate::domain::models::registration::SessionRegistration;
use crate::domain::services::capacity;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_registration(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Json(payload): Json<CreateRegistrationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.session_repo.find_by_id(&session_id).await?
        .ok_or(AppError::NotFound("Session not found".into()))?;

    let item = state.item_repo.find_by_id(&session.program_item_id).await?
        .ok_or(AppError::NotFound("Program item not found".into()))?;

    let attendee = state.attendee_repo.find_by_id(&payload.attendee_id).await?
        .ok_or(AppError::NotFound("Attendee not found".into()))?;

    if attendee.event_id != item.event_id {
        return Err(AppError::Validation("Attendee belongs to a different event".into()));
    }

    // Effective limit plus overbooking buffer; the repository re-checks the
    // count atomically with the insert.
    let cap = capacity::registration_cap(&item, &session);

    let registration = SessionRegistration::new(attendee.id, session.id, payload.note);
    let created = state.registration_repo.register(&registration, cap).await?;

    info!(
        "Registered attendee {} for session {}",
        created.attendee_id, session_id
    );
    Ok(Json(created))
}

pub async fn list_registrations(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.session_repo.find_by_id(&session_id).await?
        .ok_or(AppError::NotFound("Session not found".into()))?;

    let registrations = state.registration_repo.list_by_session(&session.id).await?;
    Ok(Json(registrations))
}

pub async fn delete_registration(
    State(state): State<Arc<AppState>>,
    Path((session_id, attendee_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.registration_repo.delete(&attendee_id, &session_id).await?;
    info!("Cancelled registration of {} for session {}", attendee_id, session_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
