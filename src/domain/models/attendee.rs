use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::audit::AuditInfo;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Attendee {
    pub id: String,
    pub event_id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub invite_token: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Attendee {
    pub fn new(event_id: String, email: String, full_name: Option<String>) -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            email,
            full_name,
            invite_token: Some(token),
            audit: AuditInfo::new(None),
        }
    }
}
