use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateSessionRequest, UpdateSessionRequest};
use crate::domain::models::session::{NewSessionParams, ProgramSession, SessionStatus};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.item_repo.find_by_id(&item_id).await?
        .ok_or(AppError::NotFound("Program item not found".into()))?;

    if let (Some(start), Some(end)) = (payload.start_time, payload.end_time) {
        if end <= start {
            return Err(AppError::Validation("End time must be after start time".into()));
        }
    }
    if payload.end_time.is_some() && payload.start_time.is_none() {
        return Err(AppError::Validation("end_time requires a start_time".into()));
    }

    if let Some(location_id) = &payload.location_id {
        state.location_repo.find_by_id(location_id).await?
            .ok_or(AppError::NotFound("Location not found".into()))?;
    }

    let session = ProgramSession::new(NewSessionParams {
        program_item_id: item.id,
        location_id: payload.location_id,
        start_time: payload.start_time,
        end_time: payload.end_time,
        note: payload.note,
        status: payload.status.unwrap_or(SessionStatus::Draft),
        attendee_limit: payload.attendee_limit,
    });

    let created = state.session_repo.create(&session).await?;
    info!("Created session {} for program item {}", created.id, item_id);
    Ok(Json(created))
}

pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.item_repo.find_by_id(&item_id).await?
        .ok_or(AppError::NotFound("Program item not found".into()))?;

    let sessions = state.session_repo.list_by_item(&item.id).await?;
    Ok(Json(sessions))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.session_repo.find_by_id(&session_id).await?
        .ok_or(AppError::NotFound("Session not found".into()))?;
    Ok(Json(session))
}

pub async fn update_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    Json(payload): Json<UpdateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state.session_repo.find_by_id(&session_id).await?
        .ok_or(AppError::NotFound("Session not found".into()))?;

    let item = state.item_repo.find_by_id(&session.program_item_id).await?
        .ok_or(AppError::NotFound("Program item not found".into()))?;

    if let Some(location_id) = payload.location_id {
        state.location_repo.find_by_id(&location_id).await?
            .ok_or(AppError::NotFound("Location not found".into()))?;
        session.location_id = Some(location_id);
    }
    if let Some(start_time) = payload.start_time {
        session.start_time = Some(start_time);
    }
    if let Some(end_time) = payload.end_time {
        session.end_time = Some(end_time);
    }
    if let (Some(start), Some(end)) = (session.start_time, session.end_time) {
        if end <= start {
            return Err(AppError::Validation("End time must be after start time".into()));
        }
    }
    if session.end_time.is_some() && session.start_time.is_none() {
        return Err(AppError::Validation("end_time requires a start_time".into()));
    }
    if let Some(note) = payload.note {
        session.note = Some(note);
    }
    if let Some(status) = payload.status {
        session.status = status;
    }

    if let Some(limit) = payload.attendee_limit {
        let registered = state.registration_repo.count_by_session(&session.id).await?;
        let cap = limit + item.attendee_limit_buffer.unwrap_or(0);
        if registered > cap {
            return Err(AppError::Conflict(format!(
                "Cannot reduce attendee limit to {}. {} registrations already exist.",
                limit, registered
            )));
        }
        session.attendee_limit = Some(limit);
    }

    session.audit.touch(None);
    let updated = state.session_repo.update(&session).await?;
    info!("Updated session {}", session_id);
    Ok(Json(updated))
}

pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.session_repo.find_by_id(&session_id).await?
        .ok_or(AppError::NotFound("Session not found".into()))?;

    let registrations = state.registration_repo.count_by_session(&session.id).await?;
    if registrations > 0 {
        return Err(AppError::Conflict("Cannot delete session with existing registrations".into()));
    }

    state.session_repo.delete(&session_id).await?;
    info!("Deleted session {}", session_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
