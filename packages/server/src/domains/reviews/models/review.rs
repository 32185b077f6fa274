use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Review model - SQL persistence layer
///
/// Tied to a service id only; no relation to a specific request or
/// reviewer identity is enforced.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub service_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Create a review for a service
    pub async fn create(
        service_id: Uuid,
        rating: i32,
        comment: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO reviews (service_id, rating, comment)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(service_id)
        .bind(rating)
        .bind(comment)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// List reviews for a service, oldest first
    pub async fn find_by_service(service_id: Uuid, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM reviews WHERE service_id = $1 ORDER BY created_at",
        )
        .bind(service_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
