use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateProgramItemRequest, UpdateProgramItemRequest};
use crate::domain::models::program_item::{NewProgramItemParams, ProgramItem, ProgramItemType};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

const DEFAULT_TIME_BUFFER_MIN: i32 = 10;

pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(payload): Json<CreateProgramItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if payload.required_min <= 0 {
        return Err(AppError::Validation("required_min must be positive".into()));
    }

    if let Some(location_id) = &payload.location_id {
        state.location_repo.find_by_id(location_id).await?
            .ok_or(AppError::NotFound("Location not found".into()))?;
    }

    let item = ProgramItem::new(NewProgramItemParams {
        event_id: event.id,
        location_id: payload.location_id,
        name: payload.name,
        description: payload.description,
        item_type: payload.item_type.unwrap_or(ProgramItemType::Unspecified),
        attendee_limit: payload.attendee_limit,
        attendee_limit_buffer: payload.attendee_limit_buffer,
        required_min: payload.required_min,
        before_buffer_min: payload.before_buffer_min.unwrap_or(DEFAULT_TIME_BUFFER_MIN),
        after_buffer_min: payload.after_buffer_min.unwrap_or(DEFAULT_TIME_BUFFER_MIN),
    });

    let created = state.item_repo.create(&item).await?;
    info!("Created program item {} for event {}", created.id, event_id);
    Ok(Json(created))
}

pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let items = state.item_repo.list_by_event(&event.id).await?;
    Ok(Json(items))
}

pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.item_repo.find_by_id(&item_id).await?
        .ok_or(AppError::NotFound("Program item not found".into()))?;
    Ok(Json(item))
}

pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
    Json(payload): Json<UpdateProgramItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut item = state.item_repo.find_by_id(&item_id).await?
        .ok_or(AppError::NotFound("Program item not found".into()))?;

    if let Some(location_id) = payload.location_id {
        state.location_repo.find_by_id(&location_id).await?
            .ok_or(AppError::NotFound("Location not found".into()))?;
        item.location_id = Some(location_id);
    }
    if let Some(name) = payload.name {
        item.name = name;
    }
    if let Some(description) = payload.description {
        item.description = Some(description);
    }
    if let Some(item_type) = payload.item_type {
        item.item_type = item_type;
    }
    if let Some(limit) = payload.attendee_limit {
        item.attendee_limit = Some(limit);
    }
    if let Some(buffer) = payload.attendee_limit_buffer {
        item.attendee_limit_buffer = Some(buffer);
    }
    if let Some(required_min) = payload.required_min {
        if required_min <= 0 {
            return Err(AppError::Validation("required_min must be positive".into()));
        }
        item.required_min = required_min;
    }
    if let Some(before) = payload.before_buffer_min {
        item.before_buffer_min = before;
    }
    if let Some(after) = payload.after_buffer_min {
        item.after_buffer_min = after;
    }

    item.audit.touch(None);
    let updated = state.item_repo.update(&item).await?;
    info!("Updated program item {}", item_id);
    Ok(Json(updated))
}

pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let item = state.item_repo.find_by_id(&item_id).await?
        .ok_or(AppError::NotFound("Program item not found".into()))?;

    // Delete is rejected, not cascaded, while scheduled sessions exist.
    let sessions = state.session_repo.count_by_item(&item.id).await?;
    if sessions > 0 {
        return Err(AppError::Conflict("Cannot delete program item with existing sessions".into()));
    }

    state.item_repo.delete(&item_id).await?;
    info!("Deleted program item {}", item_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
