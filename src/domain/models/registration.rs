use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Attendee-to-session link. The presence of the row is the registration;
/// there is no separate status field.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct SessionRegistration {
    pub attendee_id: String,
    pub session_id: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SessionRegistration {
    pub fn new(attendee_id: String, session_id: String, note: Option<String>) -> Self {
        Self {
            attendee_id,
            session_id,
            note,
            created_at: Utc::now(),
        }
    }
}
