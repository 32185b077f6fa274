//! Users domain actions - business logic functions

mod register;

pub use register::{register, Address, Professional, RegisterPayload};
