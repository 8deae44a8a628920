pub mod attendance;
pub mod event;
pub mod teacher;
pub mod user;
