//! Auth domain - password credentials and session tokens
//!
//! Responsibilities:
//! - bcrypt password hashing and verification
//! - Login (credential check + token issue)
//! - JWT creation/verification for protected routes

pub mod activities;
pub mod jwt;
pub mod password;

pub use activities::{login, LoginOutcome};
pub use jwt::{Claims, JwtService};
