use std::sync::Arc;
use crate::domain::ports::{
    AttendeeRepository, EventRepository, LocationRepository, ProgramItemRepository,
    RegistrationRepository, SessionRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_repo: Arc<dyn EventRepository>,
    pub location_repo: Arc<dyn LocationRepository>,
    pub item_repo: Arc<dyn ProgramItemRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub attendee_repo: Arc<dyn AttendeeRepository>,
    pub registration_repo: Arc<dyn RegistrationRepository>,
}
