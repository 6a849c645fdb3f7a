use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateEventRequest, UpdateEventRequest};
use crate::domain::models::event::{Event, EventStatus};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating event: {}", payload.name);

    if payload.start_date > payload.end_date {
        return Err(AppError::Validation("start_date must not be after end_date".into()));
    }

    let event = Event::new(
        payload.name,
        payload.description,
        payload.start_date,
        payload.end_date,
        payload.status.unwrap_or(EventStatus::Draft),
    );

    let created = state.event_repo.create(&event).await?;
    Ok(Json(created))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list_active().await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if let Some(name) = payload.name {
        event.name = name;
    }
    if let Some(description) = payload.description {
        event.description = Some(description);
    }
    if let Some(start_date) = payload.start_date {
        event.start_date = start_date;
    }
    if let Some(end_date) = payload.end_date {
        event.end_date = end_date;
    }
    if let Some(status) = payload.status {
        event.status = status;
    }

    if event.start_date > event.end_date {
        return Err(AppError::Validation("start_date must not be after end_date".into()));
    }

    event.audit.touch(None);
    let updated = state.event_repo.update(&event).await?;
    info!("Updated event {}", event_id);
    Ok(Json(updated))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let items = state.item_repo.count_by_event(&event.id).await?;
    if items > 0 {
        return Err(AppError::Conflict("Cannot delete event with existing program items".into()));
    }

    state.event_repo.delete(&event_id).await?;
    info!("Deleted event {}", event_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
