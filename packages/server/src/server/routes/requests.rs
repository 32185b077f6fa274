use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::common::{ApiError, ApiResult};
use crate::domains::requests::models::{Request, RequestStatus};
use crate::domains::requests::{activities, update_status};
use crate::server::app::AxumAppState;
use crate::server::middleware::AuthUser;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestPayload {
    pub service_id: Uuid,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusPayload {
    #[serde(default)]
    pub status: String,
}

/// POST /api/requests
pub async fn create_request_handler(
    auth: AuthUser,
    Extension(state): Extension<AxumAppState>,
    Json(payload): Json<CreateRequestPayload>,
) -> ApiResult<(StatusCode, Json<Request>)> {
    let request = activities::create_request(
        payload.service_id,
        Some(auth.user_id),
        payload.notes,
        &state.db_pool,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/requests/:id
pub async fn get_request_handler(
    _auth: AuthUser,
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Request>> {
    let request = Request::find_by_id(id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Solicitação não encontrada".to_string()))?;

    Ok(Json(request))
}

/// PUT /api/requests/:id/status
pub async fn update_request_status_handler(
    _auth: AuthUser,
    Extension(state): Extension<AxumAppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> ApiResult<Json<Request>> {
    let status = RequestStatus::parse(&payload.status)
        .ok_or_else(|| ApiError::Validation("Status inválido".to_string()))?;

    let request = update_status(id, status, &state.db_pool).await?;

    Ok(Json(request))
}
