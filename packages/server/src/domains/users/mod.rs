//! Users domain - accounts and registration
//!
//! Responsibilities:
//! - User persistence (unique email, hashed password)
//! - The registration workflow, including the best-effort provisioning
//!   of a provider's default service profile

pub mod activities;
pub mod data;
pub mod models;

pub use activities::{register, RegisterPayload};
pub use data::UserData;
pub use models::{Role, User};
