// HTTP routes
pub mod auth;
pub mod health;
pub mod requests;
pub mod reviews;
pub mod services;

pub use auth::*;
pub use health::*;
pub use requests::*;
pub use reviews::*;
pub use services::*;

use axum::Json;
use serde_json::{json, Value};

/// API index banner
pub async fn index_handler() -> Json<Value> {
    Json(json!({ "message": "API Conecta Bairro" }))
}
