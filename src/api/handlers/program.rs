use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::domain::services::overview::build_overview;
use crate::error::AppError;
use std::sync::Arc;
use tracing::debug;

/// The program overview: one resolved row per session of the event, ordered
/// by start time. An unknown event is 404; an event without sessions is an
/// empty list, never an error.
pub async fn get_program_overview(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let records = state.session_repo.list_overview_records(&event.id).await?;
    debug!("Program overview for event {}: {} rows", event_id, records.len());

    Ok(Json(build_overview(records)))
}
