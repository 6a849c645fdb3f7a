use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::program_item::ProgramItemType;
use super::session::SessionStatus;

/// Raw result of the aggregated overview query: one session joined with its
/// parent item and a correlated registration count. Both the item's and the
/// session's attendee limit come back unresolved; the projection into
/// [`ProgramOverviewRow`] applies the override rules.
#[derive(Debug, FromRow, Clone)]
pub struct SessionOverviewRecord {
    pub program_item_id: String,
    pub name: String,
    pub item_type: ProgramItemType,
    pub item_attendee_limit: Option<i64>,
    pub attendee_limit_buffer: Option<i64>,
    pub required_min: i32,
    pub before_buffer_min: i32,
    pub after_buffer_min: i32,
    pub session_attendee_limit: Option<i64>,
    pub note: Option<String>,
    pub status: SessionStatus,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub attendee_count: i64,
}

/// One resolved overview row: item defaults merged with session overrides
/// plus the live registration count. `attendee_limit` is the effective
/// value; `attendee_limit_buffer` stays the raw item value.
#[derive(Debug, Serialize, Clone)]
pub struct ProgramOverviewRow {
    pub program_item_id: String,
    pub name: String,
    pub item_type: ProgramItemType,
    pub attendee_limit: Option<i64>,
    pub attendee_limit_buffer: Option<i64>,
    pub note: Option<String>,
    pub status: SessionStatus,
    pub required_min: i32,
    pub before_buffer_min: i32,
    pub after_buffer_min: i32,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub attendee_count: i64,
}
