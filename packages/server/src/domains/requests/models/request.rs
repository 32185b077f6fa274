use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Request lifecycle states, stored as TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown request status: {0}")]
pub struct UnknownStatusError(String);

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Allowed transitions. Completed and cancelled are terminal.
    pub fn can_transition_to(self, next: Self) -> bool {
        use RequestStatus::*;

        matches!(
            (self, next),
            (Pending, Accepted)
                | (Pending, Cancelled)
                | (Accepted, InProgress)
                | (Accepted, Cancelled)
                | (InProgress, Completed)
                | (InProgress, Cancelled)
        )
    }
}

impl TryFrom<String> for RequestStatus {
    type Error = UnknownStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(UnknownStatusError(value))
    }
}

/// Request model - SQL persistence layer
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: Uuid,
    pub service_id: Uuid,
    pub customer_id: Option<Uuid>,
    pub notes: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Request {
    /// Create a request; the status starts as pending.
    pub async fn create(
        service_id: Uuid,
        customer_id: Option<Uuid>,
        notes: Option<String>,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO requests (service_id, customer_id, notes)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(service_id)
        .bind(customer_id)
        .bind(notes)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Find request by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM requests WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Persist a status change; returns None when the id is unknown.
    pub async fn update_status(
        id: Uuid,
        status: RequestStatus,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE requests SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Accepted,
            RequestStatus::InProgress,
            RequestStatus::Completed,
            RequestStatus::Cancelled,
        ] {
            assert_eq!(RequestStatus::parse(status.as_str()), Some(status));
        }

        assert_eq!(RequestStatus::parse("PENDING"), None);
        assert_eq!(RequestStatus::parse("done"), None);
    }

    #[test]
    fn test_allowed_transitions() {
        use RequestStatus::*;

        assert!(Pending.can_transition_to(Accepted));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Accepted.can_transition_to(InProgress));
        assert!(Accepted.can_transition_to(Cancelled));
        assert!(InProgress.can_transition_to(Completed));
        assert!(InProgress.can_transition_to(Cancelled));
    }

    #[test]
    fn test_terminal_states_have_no_successors() {
        use RequestStatus::*;

        for next in [Pending, Accepted, InProgress, Completed, Cancelled] {
            assert!(!Completed.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn test_no_skipping_ahead() {
        use RequestStatus::*;

        assert!(!Pending.can_transition_to(InProgress));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Accepted.can_transition_to(Completed));
        assert!(!Pending.can_transition_to(Pending));
    }
}
