use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::audit::AuditInfo;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum SessionStatus {
    Draft,
    Published,
    Cancelled,
    Ended,
}

/// One concrete scheduled occurrence of a program item. `location_id` and
/// `attendee_limit` are overrides: null falls through to the item default.
/// `start_time` stays null until the session is scheduled.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ProgramSession {
    pub id: String,
    pub program_item_id: String,
    pub location_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub note: Option<String>,
    pub status: SessionStatus,
    pub attendee_limit: Option<i64>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditInfo,
}

pub struct NewSessionParams {
    pub program_item_id: String,
    pub location_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub note: Option<String>,
    pub status: SessionStatus,
    pub attendee_limit: Option<i64>,
}

impl ProgramSession {
    pub fn new(params: NewSessionParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            program_item_id: params.program_item_id,
            location_id: params.location_id,
            start_time: params.start_time,
            end_time: params.end_time,
            note: params.note,
            status: params.status,
            attendee_limit: params.attendee_limit,
            audit: AuditInfo::new(None),
        }
    }
}
