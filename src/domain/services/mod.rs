pub mod capacity;
pub mod overview;
