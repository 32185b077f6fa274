use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Directory filters. Both are exact, case-sensitive matches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceFilters {
    /// Category name
    pub category: Option<String>,
    /// Neighborhood name, matched against any of the service's areas
    pub bairro: Option<String>,
}

/// Service model - SQL persistence layer
///
/// A listed offering tied to one provider and one category. The
/// provider_id carries a unique constraint: one listing per provider.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub provider_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub description: String,
    pub price_range: String,
    pub created_at: DateTime<Utc>,
}

impl Service {
    /// Find service by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find services matching the directory filters (AND semantics).
    ///
    /// No filters returns every service, in insertion order.
    pub async fn find_filtered(filters: &ServiceFilters, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT s.*
             FROM services s
             JOIN categories c ON c.id = s.category_id
             WHERE ($1::text IS NULL OR c.name = $1)
               AND ($2::text IS NULL OR EXISTS (
                    SELECT 1 FROM service_areas a
                    WHERE a.service_id = s.id AND a.neighborhood = $2))
             ORDER BY s.created_at",
        )
        .bind(&filters.category)
        .bind(&filters.bairro)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Create a service listing for a provider
    pub async fn create(
        provider_id: Uuid,
        category_id: Uuid,
        title: String,
        description: String,
        price_range: String,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO services (provider_id, category_id, title, description, price_range)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(provider_id)
        .bind(category_id)
        .bind(title)
        .bind(description)
        .bind(price_range)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Partial update; absent fields keep their current value.
    ///
    /// Returns None when the id is unknown.
    pub async fn update(
        id: Uuid,
        title: Option<String>,
        description: Option<String>,
        price_range: Option<String>,
        category_id: Option<Uuid>,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE services
             SET title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 price_range = COALESCE($4, price_range),
                 category_id = COALESCE($5, category_id)
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(price_range)
        .bind(category_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a service; returns false when the id is unknown.
    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
