use crate::api::ApiError;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub nombre_producto: String,
    #[serde(default)]
    pub cantidad_producto: i64,
    #[serde(default)]
    pub precio_producto: f64,
    #[serde(default)]
    pub descripcion_producto: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub proveedor: Option<ProviderRef>,
    #[serde(default, alias = "category")]
    pub categoria: Option<CategoryRef>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderRef {
    pub id: u64,
    pub nombre: String,
    #[serde(default)]
    pub contacto: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: u64,
    pub nombre: String,
}

/// Image attached to a product form.
#[derive(Clone, Debug)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

const ALLOWED_IMAGE_TYPES: [(&str, &str); 3] = [
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
];

impl ImageFile {
    /// Read an image from disk, keeping only its file name.
    /// # Errors
    /// Returns `ApiError::Invalid` if the file cannot be read.
    pub async fn from_path(path: &Path) -> Result<Self, ApiError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ApiError::Invalid("The image path has no file name.".to_string()))?
            .to_string();
        let bytes = tokio::fs::read(path).await.map_err(|err| {
            ApiError::Invalid(format!("Could not read image {}: {err}", path.display()))
        })?;

        Ok(Self { file_name, bytes })
    }

    /// Mime type from the extension; `None` when the type is not accepted.
    #[must_use]
    pub fn mime_type(&self) -> Option<&'static str> {
        let extension = Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();

        ALLOWED_IMAGE_TYPES
            .iter()
            .find(|(allowed, _)| *allowed == extension)
            .map(|(_, mime)| *mime)
    }
}

/// Fields submitted when creating or editing a product.
#[derive(Clone, Debug)]
pub struct ProductForm {
    pub name: String,
    pub quantity: u32,
    pub description: String,
    pub category_id: u64,
    pub provider_id: u64,
    pub price: f64,
    pub image: Option<ImageFile>,
}

impl ProductForm {
    /// # Errors
    /// Returns `ApiError::Invalid` describing the first rejected field.
    pub fn validate(&self) -> Result<(), ApiError> {
        let invalid = |message: &str| Err(ApiError::Invalid(message.to_string()));

        if self.name.trim().is_empty() {
            return invalid("The product name is required.");
        }
        if self.category_id == 0 {
            return invalid("The category is required.");
        }
        if self.provider_id == 0 {
            return invalid("The provider is required.");
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return invalid("The price must be a positive number.");
        }
        if let Some(image) = &self.image {
            if image.mime_type().is_none() {
                return invalid("Only PNG, JPG or JPEG images are allowed.");
            }
        }
        Ok(())
    }

    /// Every field becomes a text part except the image, which is a file part.
    /// # Errors
    /// Returns `ApiError::Invalid` if validation fails.
    pub fn into_multipart(self) -> Result<Form, ApiError> {
        self.validate()?;

        let form = Form::new()
            .text("name", self.name.trim().to_string())
            .text("quantity", self.quantity.to_string())
            .text("description", self.description)
            .text("categoryId", self.category_id.to_string())
            .text("providerId", self.provider_id.to_string())
            .text("price", self.price.to_string());

        let Some(image) = self.image else {
            return Ok(form);
        };

        let mime = image.mime_type().unwrap_or("application/octet-stream");
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(mime)
            .map_err(|err| ApiError::Request(err.to_string()))?;

        Ok(form.part("image", part))
    }
}
