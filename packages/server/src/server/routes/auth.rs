use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::common::ApiResult;
use crate::domains::auth;
use crate::domains::users::{register, RegisterPayload, UserData};
use crate::server::app::AxumAppState;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserData,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserData,
}

/// POST /api/auth/register
pub async fn register_handler(
    Extension(state): Extension<AxumAppState>,
    Json(payload): Json<RegisterPayload>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let user = register(payload, &state.db_pool).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse { user })))
}

/// POST /api/auth/login
pub async fn login_handler(
    Extension(state): Extension<AxumAppState>,
    Json(payload): Json<LoginPayload>,
) -> ApiResult<Json<LoginResponse>> {
    let outcome = auth::login(
        &payload.email,
        &payload.password,
        &state.jwt_service,
        &state.db_pool,
    )
    .await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        user: outcome.user,
    }))
}
