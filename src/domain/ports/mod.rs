use crate::domain::models::{
    attendee::Attendee, event::Event, location::Location, overview::SessionOverviewRecord,
    program_item::ProgramItem, registration::SessionRegistration, session::ProgramSession,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    /// Draft and published events; archived ones drop out of the listing.
    async fn list_active(&self) -> Result<Vec<Event>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn create(&self, location: &Location) -> Result<Location, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Location>, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Location>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ProgramItemRepository: Send + Sync {
    async fn create(&self, item: &ProgramItem) -> Result<ProgramItem, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ProgramItem>, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<ProgramItem>, AppError>;
    async fn update(&self, item: &ProgramItem) -> Result<ProgramItem, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn count_by_event(&self, event_id: &str) -> Result<i64, AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &ProgramSession) -> Result<ProgramSession, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ProgramSession>, AppError>;
    async fn list_by_item(&self, program_item_id: &str) -> Result<Vec<ProgramSession>, AppError>;
    async fn update(&self, session: &ProgramSession) -> Result<ProgramSession, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn count_by_item(&self, program_item_id: &str) -> Result<i64, AppError>;
    /// The one aggregated overview query: sessions joined with their parent
    /// items for the event, each with a correlated registration count,
    /// ordered by start_time ascending with unscheduled sessions last.
    async fn list_overview_records(
        &self,
        event_id: &str,
    ) -> Result<Vec<SessionOverviewRecord>, AppError>;
}

#[async_trait]
pub trait AttendeeRepository: Send + Sync {
    async fn create(&self, attendee: &Attendee) -> Result<Attendee, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Attendee>, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Attendee>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Checks capacity and inserts within one atomic scope. `cap` is the
    /// effective limit plus buffer; None means unbounded. Over cap is a
    /// Conflict and nothing is persisted.
    async fn register(
        &self,
        registration: &SessionRegistration,
        cap: Option<i64>,
    ) -> Result<SessionRegistration, AppError>;
    async fn list_by_session(&self, session_id: &str)
        -> Result<Vec<SessionRegistration>, AppError>;
    async fn count_by_session(&self, session_id: &str) -> Result<i64, AppError>;
    async fn delete(&self, attendee_id: &str, session_id: &str) -> Result<(), AppError>;
}
