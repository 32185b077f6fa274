//! Request lifecycle

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::common::{ApiError, ApiResult};
use crate::domains::catalog::models::Service;
use crate::domains::requests::models::{Request, RequestStatus};

/// Open an engagement request against an existing service
pub async fn create_request(
    service_id: Uuid,
    customer_id: Option<Uuid>,
    notes: Option<String>,
    pool: &PgPool,
) -> ApiResult<Request> {
    if Service::find_by_id(service_id, pool).await?.is_none() {
        return Err(ApiError::NotFound("Serviço não encontrado".to_string()));
    }

    let request = Request::create(service_id, customer_id, notes, pool).await?;

    info!(request_id = %request.id, service_id = %service_id, "request created");

    Ok(request)
}

/// Move a request to a new status, validating the transition.
pub async fn update_status(
    id: Uuid,
    next: RequestStatus,
    pool: &PgPool,
) -> ApiResult<Request> {
    let request = Request::find_by_id(id, pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Solicitação não encontrada".to_string()))?;

    if !request.status.can_transition_to(next) {
        return Err(ApiError::Validation(format!(
            "Transição de status inválida: {} -> {}",
            request.status.as_str(),
            next.as_str()
        )));
    }

    let updated = Request::update_status(id, next, pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Solicitação não encontrada".to_string()))?;

    info!(request_id = %id, status = next.as_str(), "request status updated");

    Ok(updated)
}
