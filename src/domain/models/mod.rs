pub mod attendee;
pub mod audit;
pub mod event;
pub mod location;
pub mod overview;
pub mod program_item;
pub mod registration;
pub mod session;
