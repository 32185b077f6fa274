//! Catalog domain - categories, service listings and coverage areas
//!
//! Responsibilities:
//! - Category upsert (created lazily when a provider registers under a
//!   new category name)
//! - Service listing CRUD (one listing per provider)
//! - The public service directory with neighborhood/category filtering

pub mod activities;
pub mod data;
pub mod models;

pub use activities::{get_service, list_services};
pub use data::ServiceData;
pub use models::{Category, Service, ServiceArea, ServiceFilters};
