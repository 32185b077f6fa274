use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domains::catalog::models::{Category, Service, ServiceArea};
use crate::domains::users::UserData;

/// Public API representation of a category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryData {
    pub id: Uuid,
    pub name: String,
}

impl From<Category> for CategoryData {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

/// Public API representation of a coverage area
#[derive(Debug, Clone, Serialize)]
pub struct ServiceAreaData {
    pub id: Uuid,
    pub city: String,
    pub neighborhood: String,
}

impl From<ServiceArea> for ServiceAreaData {
    fn from(area: ServiceArea) -> Self {
        Self {
            id: area.id,
            city: area.city,
            neighborhood: area.neighborhood,
        }
    }
}

/// A service listing enriched for display.
///
/// Provider identity, category and the full list of coverage areas come
/// joined so a listing card renders without a second round trip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceData {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price_range: String,
    pub provider: UserData,
    pub category: CategoryData,
    pub areas: Vec<ServiceAreaData>,
    pub created_at: DateTime<Utc>,
}

impl ServiceData {
    pub fn assemble(
        service: Service,
        provider: UserData,
        category: CategoryData,
        areas: Vec<ServiceAreaData>,
    ) -> Self {
        Self {
            id: service.id,
            title: service.title,
            description: service.description,
            price_range: service.price_range,
            provider,
            category,
            areas,
            created_at: service.created_at,
        }
    }
}
