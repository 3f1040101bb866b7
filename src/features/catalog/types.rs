use crate::api::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub nombre: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Provider {
    pub id: u64,
    pub nombre: String,
    #[serde(default)]
    pub contacto: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
}

/// Body for `POST /proveedores`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewProvider {
    pub nombre: String,
    pub contacto: String,
    pub direccion: String,
}

impl NewProvider {
    /// # Errors
    /// Returns `ApiError::Invalid` when the name is blank.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.nombre.trim().is_empty() {
            return Err(ApiError::Invalid("The provider name is required.".to_string()));
        }
        Ok(())
    }
}
