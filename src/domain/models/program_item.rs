use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::audit::AuditInfo;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ProgramItemType {
    Unspecified,
    Workshop,
    Lecture,
}

/// A reusable template for a bookable activity. Sessions reference it and
/// may override the location and attendee limit per occurrence.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ProgramItem {
    pub id: String,
    pub event_id: String,
    pub location_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub item_type: ProgramItemType,
    pub attendee_limit: Option<i64>,
    pub attendee_limit_buffer: Option<i64>,
    pub required_min: i32,
    pub before_buffer_min: i32,
    pub after_buffer_min: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditInfo,
}

pub struct NewProgramItemParams {
    pub event_id: String,
    pub location_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub item_type: ProgramItemType,
    pub attendee_limit: Option<i64>,
    pub attendee_limit_buffer: Option<i64>,
    pub required_min: i32,
    pub before_buffer_min: i32,
    pub after_buffer_min: i32,
}

impl ProgramItem {
    pub fn new(params: NewProgramItemParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id: params.event_id,
            location_id: params.location_id,
            name: params.name,
            description: params.description,
            item_type: params.item_type,
            attendee_limit: params.attendee_limit,
            attendee_limit_buffer: params.attendee_limit_buffer,
            required_min: params.required_min,
            before_buffer_min: params.before_buffer_min,
            after_buffer_min: params.after_buffer_min,
            audit: AuditInfo::new(None),
        }
    }
}
