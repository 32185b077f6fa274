//! Reviews domain - feedback on service listings

pub mod activities;
pub mod models;

pub use activities::create_review;
pub use models::Review;
