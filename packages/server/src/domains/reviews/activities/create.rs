//! Review creation

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::common::{ApiError, ApiResult};
use crate::domains::catalog::models::Service;
use crate::domains::reviews::models::Review;

/// Create a review for an existing service. Ratings are 1 to 5.
pub async fn create_review(
    service_id: Uuid,
    rating: i32,
    comment: &str,
    pool: &PgPool,
) -> ApiResult<Review> {
    if !(1..=5).contains(&rating) {
        return Err(ApiError::Validation(
            "Avaliação deve ser entre 1 e 5".to_string(),
        ));
    }

    if Service::find_by_id(service_id, pool).await?.is_none() {
        return Err(ApiError::NotFound("Serviço não encontrado".to_string()));
    }

    let review = Review::create(service_id, rating, comment, pool).await?;

    info!(review_id = %review.id, service_id = %service_id, "review created");

    Ok(review)
}
