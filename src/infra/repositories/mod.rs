pub mod postgres_attendee_repo;
pub mod postgres_event_repo;
pub mod postgres_location_repo;
pub mod postgres_program_item_repo;
pub mod postgres_registration_repo;
pub mod postgres_session_repo;
pub mod sqlite_attendee_repo;
pub mod sqlite_event_repo;
pub mod sqlite_location_repo;
pub mod sqlite_program_item_repo;
pub mod sqlite_registration_repo;
pub mod sqlite_session_repo;
