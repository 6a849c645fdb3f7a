use crate::domain::models::event::EventStatus;
use crate::domain::models::program_item::ProgramItemType;
use crate::domain::models::session::SessionStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: Option<EventStatus>,
}

#[derive(Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<EventStatus>,
}

#[derive(Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub color: String,
}

#[derive(Deserialize)]
pub struct CreateProgramItemRequest {
    pub location_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub item_type: Option<ProgramItemType>,
    pub attendee_limit: Option<i64>,
    pub attendee_limit_buffer: Option<i64>,
    /// Durations arrive as whole minutes.
    pub required_min: i32,
    pub before_buffer_min: Option<i32>,
    pub after_buffer_min: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateProgramItemRequest {
    pub location_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub item_type: Option<ProgramItemType>,
    pub attendee_limit: Option<i64>,
    pub attendee_limit_buffer: Option<i64>,
    pub required_min: Option<i32>,
    pub before_buffer_min: Option<i32>,
    pub after_buffer_min: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateSessionRequest {
    pub location_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub note: Option<String>,
    pub status: Option<SessionStatus>,
    pub attendee_limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdateSessionRequest {
    pub location_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub note: Option<String>,
    pub status: Option<SessionStatus>,
    pub attendee_limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct CreateAttendeeRequest {
    pub email: String,
    pub full_name: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateRegistrationRequest {
    pub attendee_id: String,
    pub note: Option<String>,
}
