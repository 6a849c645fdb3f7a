use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Creation/modification tracking shared by every persisted entity.
/// Embedded by composition (`#[sqlx(flatten)]`), never duplicated per table.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AuditInfo {
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AuditInfo {
    pub fn new(created_by: Option<String>) -> Self {
        Self {
            created_by,
            created_at: Utc::now(),
            updated_by: None,
            updated_at: None,
        }
    }

    pub fn touch(&mut self, updated_by: Option<String>) {
        self.updated_by = updated_by;
        self.updated_at = Some(Utc::now());
    }
}
