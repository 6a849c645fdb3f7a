use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::audit::AuditInfo;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Location {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub color: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: AuditInfo,
}

impl Location {
    pub fn new(
        event_id: String,
        name: String,
        latitude: Option<f64>,
        longitude: Option<f64>,
        color: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            name,
            latitude,
            longitude,
            color,
            audit: AuditInfo::new(None),
        }
    }

    /// Colors are stored as bare 6-digit hex codes ("1a2b3c"), no leading '#'.
    pub fn is_valid_color(color: &str) -> bool {
        color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit())
    }
}
