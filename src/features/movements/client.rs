use crate::{
    api::{ApiClient, ApiError},
    features::movements::types::Movement,
};

pub async fn list_movements(api: &ApiClient) -> Result<Vec<Movement>, ApiError> {
    api.get_json("/historial").await
}
