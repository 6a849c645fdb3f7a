pub mod attendee;
pub mod event;
pub mod health;
pub mod location;
pub mod program;
pub mod program_item;
pub mod registration;
pub mod session;
