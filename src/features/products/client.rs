//! Client helpers for product endpoints. Create and update always go through
//! the multipart flow so an image can ride along with the fields.

use crate::{
    api::{ApiClient, ApiError},
    features::{
        products::types::{Product, ProductForm},
        require_id,
    },
};

pub async fn list_products(api: &ApiClient) -> Result<Vec<Product>, ApiError> {
    api.get_json("/productos").await
}

/// Most recently added products, as shown on the dashboard.
pub async fn recent_products(api: &ApiClient) -> Result<Vec<Product>, ApiError> {
    api.get_json("/productos/recientes").await
}

pub async fn get_product(api: &ApiClient, id: &str) -> Result<Product, ApiError> {
    let id = require_id(id, "product")?;
    api.get_json(&format!("/productos/{id}")).await
}

pub async fn create_product(api: &ApiClient, form: ProductForm) -> Result<Product, ApiError> {
    api.post_multipart("/productos", form.into_multipart()?)
        .await
}

pub async fn update_product(
    api: &ApiClient,
    id: &str,
    form: ProductForm,
) -> Result<(), ApiError> {
    let id = require_id(id, "product")?;
    api.put_multipart(&format!("/productos/{id}"), form.into_multipart()?)
        .await
}

pub async fn delete_product(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    let id = require_id(id, "product")?;
    api.delete(&format!("/productos/{id}")).await
}
