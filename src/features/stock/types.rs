use crate::api::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StockProduct {
    pub id: u64,
    #[serde(default)]
    pub nombre_producto: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: u64,
    #[serde(default)]
    pub producto: Option<StockProduct>,
    #[serde(default)]
    pub producto_id: Option<u64>,
    #[serde(default)]
    pub cantidad_disponible: i64,
    #[serde(default)]
    pub cantidad_minima: i64,
    #[serde(default)]
    pub cantidad_maxima: i64,
}

impl Stock {
    /// The backend nests the product on some responses and flattens it on others.
    #[must_use]
    pub fn product_id(&self) -> Option<u64> {
        self.producto
            .as_ref()
            .map(|product| product.id)
            .or(self.producto_id)
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ProductLink {
    pub id: u64,
}

/// Body for `POST /stocks`. With `id` set the backend updates that entry.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StockRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub producto: ProductLink,
    pub cantidad_disponible: u32,
    pub cantidad_minima: u32,
    pub cantidad_maxima: u32,
}

impl StockRequest {
    #[must_use]
    pub fn new(product_id: u64, available: u32, minimum: u32, maximum: u32) -> Self {
        Self {
            id: None,
            producto: ProductLink { id: product_id },
            cantidad_disponible: available,
            cantidad_minima: minimum,
            cantidad_maxima: maximum,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// # Errors
    /// Returns `ApiError::Invalid` for a missing product or `minimum > maximum`.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.producto.id == 0 {
            return Err(ApiError::Invalid("The product is required.".to_string()));
        }
        if self.cantidad_minima > self.cantidad_maxima {
            return Err(ApiError::Invalid(
                "The minimum quantity cannot exceed the maximum.".to_string(),
            ));
        }
        Ok(())
    }
}
