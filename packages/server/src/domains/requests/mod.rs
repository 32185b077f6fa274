//! Requests domain - service engagement requests
//!
//! A request references a service and moves through an explicit status
//! lifecycle starting at pending.

pub mod activities;
pub mod models;

pub use activities::update_status;
pub use models::{Request, RequestStatus};
