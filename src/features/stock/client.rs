use crate::{
    api::{ApiClient, ApiError},
    features::{
        require_id,
        stock::types::{Stock, StockRequest},
    },
};

pub async fn list_stock(api: &ApiClient) -> Result<Vec<Stock>, ApiError> {
    api.get_json("/stocks").await
}

/// Create or update a stock entry; both go through `POST /stocks`.
/// # Errors
/// Returns `ApiError::Invalid` when quantities are inconsistent, otherwise any
/// request failure.
pub async fn save_stock(api: &ApiClient, request: &StockRequest) -> Result<Stock, ApiError> {
    request.validate()?;
    api.post_json("/stocks", request).await
}

pub async fn delete_stock(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    let id = require_id(id, "stock")?;
    api.delete(&format!("/stocks/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::testing::{can_bind_localhost, signed_client};
    use anyhow::Result;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn update_posts_with_id() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/stocks"))
            .and(body_json(json!({
                "id": 3,
                "producto": { "id": 8 },
                "cantidadDisponible": 12,
                "cantidadMinima": 2,
                "cantidadMaxima": 40
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 3,
                "producto": { "id": 8, "nombreProducto": "Drill" },
                "cantidadDisponible": 12,
                "cantidadMinima": 2,
                "cantidadMaxima": 40
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (api, _) = signed_client(&server, "t.o.k")?;
        let saved = save_stock(&api, &StockRequest::new(8, 12, 2, 40).with_id(3)).await?;

        assert_eq!(saved.product_id(), Some(8));
        Ok(())
    }

    #[tokio::test]
    async fn inconsistent_quantities_stay_local() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (api, notifier) = signed_client(&server, "t.o.k")?;
        let result = save_stock(&api, &StockRequest::new(8, 1, 50, 10)).await;

        assert!(matches!(result, Err(ApiError::Invalid(_))));
        assert!(notifier.messages().is_empty());
        Ok(())
    }
}
