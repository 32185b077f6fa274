//! Public service directory
//!
//! Filters the catalog by category and neighborhood, then enriches each
//! match with its provider, category and coverage areas in batch.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{ApiError, ApiResult};
use crate::domains::catalog::data::ServiceData;
use crate::domains::catalog::models::{Category, Service, ServiceArea, ServiceFilters};
use crate::domains::users::models::User;

/// List services matching the filters, enriched for display.
///
/// Empty filters return the whole directory.
pub async fn list_services(filters: &ServiceFilters, pool: &PgPool) -> ApiResult<Vec<ServiceData>> {
    let services = Service::find_filtered(filters, pool).await?;
    enrich(services, pool).await
}

/// Fetch a single enriched service listing
pub async fn get_service(id: Uuid, pool: &PgPool) -> ApiResult<ServiceData> {
    let service = Service::find_by_id(id, pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Serviço não encontrado".to_string()))?;

    enrich(vec![service], pool)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::NotFound("Serviço não encontrado".to_string()))
}

/// Join providers, categories and areas onto the services.
///
/// Related rows are batch-loaded with ANY($1) to keep the directory a
/// fixed number of queries regardless of result size.
async fn enrich(services: Vec<Service>, pool: &PgPool) -> ApiResult<Vec<ServiceData>> {
    if services.is_empty() {
        return Ok(Vec::new());
    }

    let service_ids: Vec<Uuid> = services.iter().map(|s| s.id).collect();
    let provider_ids: Vec<Uuid> = services.iter().map(|s| s.provider_id).collect();
    let category_ids: Vec<Uuid> = services.iter().map(|s| s.category_id).collect();

    let providers: HashMap<Uuid, User> = User::find_by_ids(&provider_ids, pool)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let categories: HashMap<Uuid, Category> = Category::find_by_ids(&category_ids, pool)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    let mut areas_by_service: HashMap<Uuid, Vec<ServiceArea>> = HashMap::new();
    for area in ServiceArea::find_by_service_ids(&service_ids, pool).await? {
        areas_by_service.entry(area.service_id).or_default().push(area);
    }

    let listings = services
        .into_iter()
        .filter_map(|service| {
            let provider = providers.get(&service.provider_id)?.clone();
            let category = categories.get(&service.category_id)?.clone();
            let areas = areas_by_service
                .remove(&service.id)
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect();

            Some(ServiceData::assemble(
                service,
                provider.into(),
                category.into(),
                areas,
            ))
        })
        .collect();

    Ok(listings)
}
