use crate::{
    api::{ApiClient, ApiError},
    features::{
        catalog::types::{Category, NewProvider, Provider},
        require_id,
    },
};

pub async fn list_categories(api: &ApiClient) -> Result<Vec<Category>, ApiError> {
    api.get_json("/categorias").await
}

pub async fn list_providers(api: &ApiClient) -> Result<Vec<Provider>, ApiError> {
    api.get_json("/proveedores").await
}

/// # Errors
/// Returns `ApiError::Invalid` for a blank name, otherwise any request failure.
pub async fn create_provider(api: &ApiClient, provider: &NewProvider) -> Result<Provider, ApiError> {
    provider.validate()?;
    api.post_json("/proveedores", provider).await
}

pub async fn delete_provider(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    let id = require_id(id, "provider")?;
    api.delete(&format!("/proveedores/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::testing::{can_bind_localhost, signed_client};
    use anyhow::Result;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn provider_lifecycle() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/proveedores"))
            .and(header("authorization", "Bearer t.o.k"))
            .and(body_json(json!({
                "nombre": "Acme",
                "contacto": "acme@example.com",
                "direccion": "Main St 1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 9,
                "nombre": "Acme",
                "contacto": "acme@example.com",
                "direccion": "Main St 1"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/proveedores/9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let (api, notifier) = signed_client(&server, "t.o.k")?;
        let created = create_provider(
            &api,
            &NewProvider {
                nombre: "Acme".to_string(),
                contacto: "acme@example.com".to_string(),
                direccion: "Main St 1".to_string(),
            },
        )
        .await?;
        delete_provider(&api, &created.id.to_string()).await?;

        assert_eq!(created.id, 9);
        assert!(notifier.messages().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn categories_decode() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categorias"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "nombre": "Tools" },
                { "id": 2, "nombre": "Paint" }
            ])))
            .mount(&server)
            .await;

        let (api, _) = signed_client(&server, "t.o.k")?;
        let categories = list_categories(&api).await?;

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].nombre, "Paint");
        Ok(())
    }
}
