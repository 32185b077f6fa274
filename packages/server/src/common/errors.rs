//! API error taxonomy.
//!
//! Every handler failure maps to one of these variants at the HTTP
//! boundary. Data-layer errors bubble up as `Internal` unless a caller
//! maps them to something more specific (e.g. a unique violation on
//! registration becomes `Conflict`).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed input (400)
    #[error("{0}")]
    Validation(String),

    /// Bad credentials or bad/expired token (401)
    #[error("{0}")]
    Authentication(String),

    /// Unknown id (404)
    #[error("{0}")]
    NotFound(String),

    /// Duplicate unique field (409)
    #[error("{0}")]
    Conflict(String),

    /// Anything unhandled (500) - logged, never leaked to the client
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            Self::Authentication(message) => (StatusCode::UNAUTHORIZED, message.clone()),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            Self::Conflict(message) => (StatusCode::CONFLICT, message.clone()),
            Self::Internal(err) => {
                tracing::error!(error = %err, "unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Check whether a database error is a unique-constraint violation.
///
/// Callers that race a pre-check against an insert (e.g. email
/// uniqueness) use this to map the violation to a conflict instead of a
/// 500.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation)
        }
        _ => false,
    }
}
