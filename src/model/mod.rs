pub mod attendance;
pub mod event;
pub mod role;
pub mod user;
