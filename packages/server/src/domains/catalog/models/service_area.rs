use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// ServiceArea model - a city/neighborhood pair where a service is offered
///
/// A service may cover many areas; registration provisions exactly one.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ServiceArea {
    pub id: Uuid,
    pub service_id: Uuid,
    pub city: String,
    pub neighborhood: String,
    pub created_at: DateTime<Utc>,
}

impl ServiceArea {
    /// Create a coverage area for a service
    pub async fn create(
        service_id: Uuid,
        city: &str,
        neighborhood: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO service_areas (service_id, city, neighborhood)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(service_id)
        .bind(city)
        .bind(neighborhood)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Batch lookup for enriching service listings
    pub async fn find_by_service_ids(ids: &[Uuid], pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM service_areas WHERE service_id = ANY($1) ORDER BY created_at",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
