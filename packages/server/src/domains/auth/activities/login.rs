//! Login action

use sqlx::PgPool;
use tracing::info;

use crate::common::{ApiError, ApiResult};
use crate::domains::auth::password::verify_password;
use crate::domains::auth::JwtService;
use crate::domains::users::data::UserData;
use crate::domains::users::models::User;

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserData,
}

/// Check credentials and issue a session token.
///
/// Unknown email and wrong password both answer the same generic
/// authentication error: the response must not disclose which field was
/// wrong.
pub async fn login(
    email: &str,
    password: &str,
    jwt_service: &JwtService,
    pool: &PgPool,
) -> ApiResult<LoginOutcome> {
    let user = User::find_by_email(email, pool)
        .await?
        .ok_or_else(|| ApiError::Authentication("Credenciais inválidas".to_string()))?;

    if !verify_password(password, &user.password_hash)? {
        return Err(ApiError::Authentication("Credenciais inválidas".to_string()));
    }

    let token = jwt_service.create_token(user.id, user.role)?;

    info!(user_id = %user.id, "user logged in");

    Ok(LoginOutcome {
        token,
        user: user.into(),
    })
}
