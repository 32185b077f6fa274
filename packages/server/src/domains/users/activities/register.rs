//! Account registration
//!
//! Creating the account is the primary effect. When the account
//! registers as a provider, a default service profile (category +
//! listing + coverage area) is provisioned as a secondary, best-effort
//! step: provisioning failures must not fail the already-committed
//! account creation.

use serde::{Deserialize, Deserializer};
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use crate::common::{is_unique_violation, ApiError, ApiResult};
use crate::domains::auth::password::hash_password;
use crate::domains::catalog::models::{Category, Service, ServiceArea};
use crate::domains::users::data::UserData;
use crate::domains::users::models::{Role, User};

/// Registration payload.
///
/// `address` and `professional` are only meaningful when the account
/// registers as a provider. Both are parsed leniently: a malformed
/// descriptor is treated as absent rather than rejecting the whole
/// registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<Address>,
    #[serde(default, deserialize_with = "lenient")]
    pub professional: Option<Professional>,
}

/// Where the provider operates
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    /// Legacy clients send this field as "bairro"
    #[serde(default, alias = "bairro")]
    pub neighborhood: Option<String>,
}

/// Professional descriptor for provider registrations
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
}

/// Deserialize a nested structure, mapping malformed shapes to None.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Register a new account.
///
/// Steps:
/// 1. Required fields present, else validation error
/// 2. Email not yet registered, else conflict (the unique index on
///    users.email backstops this pre-check against concurrent inserts)
/// 3. Password hashed with bcrypt before persisting
/// 4. User row inserted - must succeed or the whole operation fails
/// 5. Providers get a default service profile, best-effort
pub async fn register(payload: RegisterPayload, pool: &PgPool) -> ApiResult<UserData> {
    if payload.name.trim().is_empty()
        || payload.email.trim().is_empty()
        || payload.password.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "Campos obrigatórios faltando".to_string(),
        ));
    }

    if User::exists_by_email(&payload.email, pool).await? {
        return Err(ApiError::Conflict("E-mail já registrado".to_string()));
    }

    let role = payload
        .role
        .as_deref()
        .map(Role::parse)
        .unwrap_or(Role::Customer);

    let password_hash = hash_password(&payload.password)?;

    let user = User {
        id: Uuid::new_v4(),
        name: payload.name.clone(),
        email: payload.email.clone(),
        password_hash,
        whatsapp: payload.whatsapp.clone(),
        cep: payload.cep.clone(),
        role,
        created_at: chrono::Utc::now(),
    };

    let user = match user.insert(pool).await {
        Ok(user) => user,
        Err(err) => {
            match err.downcast_ref::<sqlx::Error>() {
                Some(db_err) if is_unique_violation(db_err) => {
                    return Err(ApiError::Conflict("E-mail já registrado".to_string()));
                }
                _ => return Err(err.into()),
            }
        }
    };

    if role == Role::Provider {
        if let Some(professional) = &payload.professional {
            if let Err(err) =
                provision_provider_profile(&user, professional, payload.address.as_ref(), pool)
                    .await
            {
                error!(
                    error = %err,
                    user_id = %user.id,
                    "failed to provision provider profile"
                );
            }
        }
    }

    info!(user_id = %user.id, role = role.as_str(), "user registered");

    Ok(user.into())
}

/// Create the provider's default category, service listing and coverage
/// area from the registration payload.
async fn provision_provider_profile(
    user: &User,
    professional: &Professional,
    address: Option<&Address>,
    pool: &PgPool,
) -> anyhow::Result<()> {
    let category_name = professional
        .categories
        .first()
        .map(String::as_str)
        .unwrap_or("Geral");

    let category = Category::upsert_by_name(category_name, pool).await?;

    let service = Service::create(
        user.id,
        category.id,
        format!("{} - {}", user.name, category.name),
        professional.description.clone().unwrap_or_default(),
        professional
            .hourly_rate
            .map(|rate| rate.to_string())
            .unwrap_or_else(|| "A combinar".to_string()),
        pool,
    )
    .await?;

    let neighborhood = address
        .and_then(|a| a.neighborhood.as_deref())
        .filter(|n| !n.is_empty())
        .unwrap_or("Não informado");
    let city = address
        .and_then(|a| a.city.as_deref())
        .unwrap_or_default();

    ServiceArea::create(service.id, city, neighborhood, pool).await?;

    info!(
        user_id = %user.id,
        service_id = %service.id,
        category = %category.name,
        "provisioned provider profile"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_minimal() {
        let payload: RegisterPayload = serde_json::from_str(
            r#"{"name": "Ana", "email": "ana@example.com", "password": "s3cret"}"#,
        )
        .unwrap();

        assert_eq!(payload.name, "Ana");
        assert!(payload.role.is_none());
        assert!(payload.address.is_none());
        assert!(payload.professional.is_none());
    }

    #[test]
    fn test_payload_missing_fields_default_to_empty() {
        let payload: RegisterPayload = serde_json::from_str(r#"{"email": "x@y.z"}"#).unwrap();

        assert!(payload.name.is_empty());
        assert!(payload.password.is_empty());
    }

    #[test]
    fn test_address_accepts_bairro_alias() {
        let address: Address =
            serde_json::from_str(r#"{"city": "São Paulo", "bairro": "Centro"}"#).unwrap();

        assert_eq!(address.neighborhood.as_deref(), Some("Centro"));
    }

    #[test]
    fn test_professional_camel_case() {
        let professional: Professional = serde_json::from_str(
            r#"{"categories": ["Jardinagem"], "description": "Podas", "hourlyRate": 50}"#,
        )
        .unwrap();

        assert_eq!(professional.categories, vec!["Jardinagem"]);
        assert_eq!(professional.hourly_rate, Some(50.0));
    }

    #[test]
    fn test_malformed_professional_is_dropped() {
        // categories as a string is not a valid descriptor; registration
        // must still parse, with no provisioning data.
        let payload: RegisterPayload = serde_json::from_str(
            r#"{
                "name": "Ana",
                "email": "ana@example.com",
                "password": "s3cret",
                "role": "provider",
                "professional": {"categories": "Jardinagem"}
            }"#,
        )
        .unwrap();

        assert!(payload.professional.is_none());
    }

    #[test]
    fn test_non_object_professional_is_dropped() {
        let payload: RegisterPayload = serde_json::from_str(
            r#"{
                "name": "Ana",
                "email": "ana@example.com",
                "password": "s3cret",
                "professional": "eletricista"
            }"#,
        )
        .unwrap();

        assert!(payload.professional.is_none());
    }
}
