use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::common::{is_unique_violation, ApiError, ApiResult};
use crate::domains::catalog::models::{Service, ServiceFilters};
use crate::domains::catalog::{get_service, list_services, ServiceData};
use crate::server::app::AxumAppState;
use crate::server::middleware::AuthUser;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicePayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_range: Option<String>,
    pub category_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServicePayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
}

/// GET /api/services?bairro=&category=
pub async fn list_services_handler(
    Extension(state): Extension<AxumAppState>,
    Query(filters): Query<ServiceFilters>,
) -> ApiResult<Json<Vec<ServiceData>>> {
    let services = list_services(&filters, &state.db_pool).await?;

    Ok(Json(services))
}

/// GET /api/services/:id
pub async fn get_service_handler(
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ServiceData>> {
    let service = get_service(id, &state.db_pool).await?;

    Ok(Json(service))
}

/// POST /api/services
///
/// The authenticated caller becomes the provider. The one-listing-per-
/// provider constraint surfaces as a conflict.
pub async fn create_service_handler(
    auth: AuthUser,
    Extension(state): Extension<AxumAppState>,
    Json(payload): Json<CreateServicePayload>,
) -> ApiResult<(StatusCode, Json<Service>)> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation(
            "Campos obrigatórios faltando".to_string(),
        ));
    }

    let service = Service::create(
        auth.user_id,
        payload.category_id,
        payload.title,
        payload.description,
        payload
            .price_range
            .unwrap_or_else(|| "A combinar".to_string()),
        &state.db_pool,
    )
    .await
    .map_err(|err| match err.downcast_ref::<sqlx::Error>() {
        Some(db_err) if is_unique_violation(db_err) => {
            ApiError::Conflict("Prestador já possui um serviço cadastrado".to_string())
        }
        _ => ApiError::Internal(err),
    })?;

    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/services/:id
pub async fn update_service_handler(
    _auth: AuthUser,
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServicePayload>,
) -> ApiResult<Json<Service>> {
    let service = Service::update(
        id,
        payload.title,
        payload.description,
        payload.price_range,
        payload.category_id,
        &state.db_pool,
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Serviço não encontrado".to_string()))?;

    Ok(Json(service))
}

/// DELETE /api/services/:id
pub async fn delete_service_handler(
    _auth: AuthUser,
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = Service::delete(id, &state.db_pool).await?;

    if !deleted {
        return Err(ApiError::NotFound("Serviço não encontrado".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
