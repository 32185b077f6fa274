//! Test fixtures for creating test data.
//!
//! Fixtures go through the registration workflow itself, so provider
//! accounts arrive with their provisioned service profile. The database
//! is shared across tests - every fixture uses unique emails and labels.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use server_core::domains::catalog::models::Service;
use server_core::domains::users::activities::{Address, Professional};
use server_core::domains::users::{register, RegisterPayload, UserData};

/// Unique email so tests sharing the database stay independent
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::new_v4())
}

/// Unique label (category or neighborhood name) for the same reason
pub fn unique_label(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{} {}", prefix, &suffix[..8])
}

/// Minimal customer registration payload
pub fn customer_payload(name: &str, email: &str) -> RegisterPayload {
    RegisterPayload {
        name: name.to_string(),
        email: email.to_string(),
        password: "s3cret".to_string(),
        whatsapp: None,
        cep: None,
        role: None,
        address: None,
        professional: None,
    }
}

/// Provider registration payload with one category and one neighborhood
pub fn provider_payload(
    name: &str,
    email: &str,
    category: &str,
    neighborhood: &str,
) -> RegisterPayload {
    RegisterPayload {
        name: name.to_string(),
        email: email.to_string(),
        password: "s3cret".to_string(),
        whatsapp: Some("+5511999990000".to_string()),
        cep: Some("01310-100".to_string()),
        role: Some("provider".to_string()),
        address: Some(Address {
            city: Some("São Paulo".to_string()),
            neighborhood: Some(neighborhood.to_string()),
        }),
        professional: Some(Professional {
            categories: vec![category.to_string()],
            description: Some("Atendimento na vizinhança".to_string()),
            hourly_rate: Some(80.0),
        }),
    }
}

/// Register a provider and return the account with its provisioned service
pub async fn create_test_provider(
    name: &str,
    category: &str,
    neighborhood: &str,
    pool: &PgPool,
) -> Result<(UserData, Service)> {
    let email = unique_email("provider");
    let user = register(provider_payload(name, &email, category, neighborhood), pool)
        .await
        .map_err(|err| anyhow::anyhow!("registration failed: {err}"))?;

    let service = service_of(user.id, pool)
        .await?
        .expect("provider registration should provision a service");

    Ok((user, service))
}

/// Register a plain customer account
pub async fn create_test_customer(name: &str, pool: &PgPool) -> Result<UserData> {
    let email = unique_email("customer");
    register(customer_payload(name, &email), pool)
        .await
        .map_err(|err| anyhow::anyhow!("registration failed: {err}"))
}

/// The provider's single provisioned service, if any
pub async fn service_of(provider_id: Uuid, pool: &PgPool) -> Result<Option<Service>> {
    sqlx::query_as::<_, Service>("SELECT * FROM services WHERE provider_id = $1")
        .bind(provider_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
}

/// Count users registered under an email
pub async fn count_users_with_email(email: &str, pool: &PgPool) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
}
