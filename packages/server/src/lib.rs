// Conecta Bairro - API Core
//
// This crate provides the backend API for the neighborhood services
// marketplace: accounts, provider service listings, the public service
// directory, engagement requests and reviews.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
