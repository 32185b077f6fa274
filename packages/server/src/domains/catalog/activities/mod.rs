//! Catalog actions - business logic functions

mod directory;

pub use directory::{get_service, list_services};
