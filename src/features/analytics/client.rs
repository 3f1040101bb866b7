use crate::{
    api::{ApiClient, ApiError},
    features::analytics::types::{DashboardSummary, MostMovedProduct},
};

pub async fn dashboard_summary(api: &ApiClient) -> Result<DashboardSummary, ApiError> {
    api.get_json("/api/v1/dashboard").await
}

pub async fn most_moved_products(api: &ApiClient) -> Result<Vec<MostMovedProduct>, ApiError> {
    api.get_json("/api/analiticas/productos-mas-movidos").await
}
