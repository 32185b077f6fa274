//! Requests domain actions - business logic functions

mod lifecycle;

pub use lifecycle::{create_request, update_status};
