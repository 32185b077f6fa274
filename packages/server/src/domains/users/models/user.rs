use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Account role, stored as TEXT.
///
/// Anything that does not denote a provider is treated as a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Provider,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Provider => "provider",
        }
    }

    /// Parse the role strings accepted at registration.
    ///
    /// Legacy clients send "PROVIDER" or "PROFESSIONAL" in mixed case;
    /// unknown values fall back to customer.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "provider" | "professional" => Self::Provider,
            _ => Self::Customer,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// User model - SQL persistence layer
///
/// Identity fields (name, email) are immutable after registration.
/// The password hash never leaves the data layer; API responses use
/// `UserData` instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub whatsapp: Option<String>,
    pub cep: Option<String>,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Find user by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find user by email (unique)
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Check if a user with this email exists
    pub async fn exists_by_email(email: &str, pool: &PgPool) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Batch lookup for enriching service listings
    pub async fn find_by_ids(ids: &[Uuid], pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert new user
    ///
    /// The id and timestamp come from the database; use the returned row.
    pub async fn insert(&self, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO users (name, email, password_hash, whatsapp, cep, role)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.password_hash)
        .bind(&self.whatsapp)
        .bind(&self.cep)
        .bind(self.role.as_str())
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("provider"), Role::Provider);
        assert_eq!(Role::parse("PROVIDER"), Role::Provider);
        assert_eq!(Role::parse("PROFESSIONAL"), Role::Provider);
        assert_eq!(Role::parse("customer"), Role::Customer);
        assert_eq!(Role::parse("anything else"), Role::Customer);
        assert_eq!(Role::parse(""), Role::Customer);
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse(Role::Provider.as_str()), Role::Provider);
        assert_eq!(Role::parse(Role::Customer.as_str()), Role::Customer);
    }
}
