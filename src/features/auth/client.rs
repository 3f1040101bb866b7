//! Client wrappers for the auth endpoints.

use crate::{
    api::{ApiClient, ApiError},
    features::{
        auth::types::{AuthResponse, LoginRequest, RegisterRequest},
        valid_email,
    },
    session::{SessionContext, StoreError},
};
use secrecy::SecretString;

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MIN_FULL_NAME_CHARS: usize = 3;

fn validate_email(email: &str) -> Result<(), ApiError> {
    if valid_email(email.trim()) {
        Ok(())
    } else {
        Err(ApiError::Invalid("Enter a valid email address.".to_string()))
    }
}

fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ApiError::Invalid(format!(
            "The password must be at least {MIN_PASSWORD_CHARS} characters long."
        )));
    }
    Ok(())
}

/// Exchange credentials for a session token.
/// # Errors
/// Returns `ApiError::Invalid` for malformed input, otherwise any request failure.
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<SecretString, ApiError> {
    validate_email(&request.email)?;
    validate_password(&request.password)?;

    let response: AuthResponse = api.post_json("/auth/login", request).await?;
    Ok(SecretString::from(response.token))
}

/// Create an account; the backend answers with a token for the new user.
/// # Errors
/// Returns `ApiError::Invalid` for malformed input, otherwise any request failure.
pub async fn register(
    api: &ApiClient,
    request: &RegisterRequest,
) -> Result<SecretString, ApiError> {
    if request.full_name.trim().chars().count() < MIN_FULL_NAME_CHARS {
        return Err(ApiError::Invalid(format!(
            "The name must be at least {MIN_FULL_NAME_CHARS} characters long."
        )));
    }
    validate_email(&request.email)?;
    validate_password(&request.password)?;

    let response: AuthResponse = api.post_json("/auth/register", request).await?;
    Ok(SecretString::from(response.token))
}

/// Ask the backend to mail reset instructions. The email is sent as plain text.
/// # Errors
/// Returns `ApiError::Invalid` for a malformed email, otherwise any request failure.
pub async fn forgot_password(api: &ApiClient, email: &str) -> Result<(), ApiError> {
    let email = email.trim();
    validate_email(email)?;
    api.post_text("/auth/forgot-password", email).await
}

/// Drop the local session; there is no server-side logout endpoint.
/// # Errors
/// Returns an error if the token cannot be removed from the store.
pub fn logout(session: &SessionContext) -> Result<(), StoreError> {
    session.sign_out()
}
