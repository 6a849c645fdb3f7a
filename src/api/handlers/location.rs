use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateLocationRequest;
use crate::domain::models::location::Location;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_location(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    // Rejected before anything is persisted.
    if !Location::is_valid_color(&payload.color) {
        return Err(AppError::Validation("Color must be a 6-digit hex code".into()));
    }

    if let Some(lat) = payload.latitude {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::Validation("Latitude must be between -90 and 90".into()));
        }
    }
    if let Some(lon) = payload.longitude {
        if !(-180.0..=180.0).contains(&lon) {
            return Err(AppError::Validation("Longitude must be between -180 and 180".into()));
        }
    }

    let location = Location::new(
        event.id,
        payload.name,
        payload.latitude,
        payload.longitude,
        payload.color,
    );

    let created = state.location_repo.create(&location).await?;
    info!("Created location {} for event {}", created.id, event_id);
    Ok(Json(created))
}

pub async fn list_locations(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let locations = state.location_repo.list_by_event(&event.id).await?;
    Ok(Json(locations))
}

pub async fn delete_location(
    State(state): State<Arc<AppState>>,
    Path(location_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.location_repo.delete(&location_id).await?;
    info!("Deleted location {}", location_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
