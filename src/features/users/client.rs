use crate::{
    api::{ApiClient, ApiError},
    features::{
        products::ImageFile,
        require_id,
        users::types::{Employee, ProfilePicture, ProfileSettings},
    },
};
use reqwest::multipart::{Form, Part};

pub async fn list_employees(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.get_json("/api/usuarios/empleados").await
}

/// Employees whose registration has been approved.
pub async fn approved_employees(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    let employees = list_employees(api).await?;
    Ok(employees.into_iter().filter(Employee::is_approved).collect())
}

pub async fn delete_user(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    let id = require_id(id, "user")?;
    api.delete(&format!("/api/usuarios/{id}")).await
}

/// Upload the signed-in user's picture as the multipart part `imagen`.
/// # Errors
/// Returns `ApiError::Invalid` for unsupported image types, otherwise any
/// request failure.
pub async fn upload_profile_picture(
    api: &ApiClient,
    image: ImageFile,
) -> Result<ProfilePicture, ApiError> {
    let mime = image
        .mime_type()
        .ok_or_else(|| ApiError::Invalid("Only PNG, JPG or JPEG images are allowed.".to_string()))?;
    let part = Part::bytes(image.bytes)
        .file_name(image.file_name)
        .mime_str(mime)
        .map_err(|err| ApiError::Request(err.to_string()))?;

    api.post_multipart("/api/usuarios/me/foto", Form::new().part("imagen", part))
        .await
}

/// # Errors
/// Returns `ApiError::Invalid` when nothing would change, otherwise any request
/// failure.
pub async fn update_settings(api: &ApiClient, settings: &ProfileSettings) -> Result<(), ApiError> {
    if settings.is_empty() {
        return Err(ApiError::Invalid("There are no settings to update.".to_string()));
    }
    api.put_json_empty("/api/usuarios/configuracion", settings)
        .await
}
