use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::common::ApiResult;
use crate::domains::reviews::{create_review, Review};
use crate::server::app::AxumAppState;
use crate::server::middleware::AuthUser;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewPayload {
    pub service_id: Uuid,
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

/// POST /api/reviews
pub async fn create_review_handler(
    _auth: AuthUser,
    Extension(state): Extension<AxumAppState>,
    Json(payload): Json<CreateReviewPayload>,
) -> ApiResult<(StatusCode, Json<Review>)> {
    let review = create_review(
        payload.service_id,
        payload.rating,
        &payload.comment,
        &state.db_pool,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/reviews/service/:service_id
pub async fn list_service_reviews_handler(
    Extension(state): Extension<AxumAppState>,
    Path(service_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Review>>> {
    let reviews = Review::find_by_service(service_id, &state.db_pool).await?;

    Ok(Json(reviews))
}
