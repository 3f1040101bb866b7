//! Authenticated API client. One instance is built at startup and shared by
//! reference; it signs every request with the stored token and turns every
//! failure into exactly one notification before returning the error.
//!
//! Flow Overview:
//! - Resolve the path against the configured base URL.
//! - Read `token` from the store at send time; attach `Authorization: Bearer`
//!   when present, otherwise send the request unauthenticated.
//! - Success passes through. No response maps to `Connectivity`; an error status
//!   maps through the message table. Either way the notifier is called once and
//!   the error is returned so callers can add their own handling.
//!
//! No retries, no backoff and no deduplication: each call is at-most-once.

use super::{
    config::ApiConfig,
    errors::{ApiError, sanitize_body, server_message},
    notify::Notifier,
};
use crate::session::{
    TokenStore,
    token::{decode_claims, now_unix},
};
use reqwest::{
    Client, Method, RequestBuilder, Response,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
    multipart::Form,
};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{Instrument, debug, info_span, warn};

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: Arc<ApiConfig>,
    store: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Build the shared client.
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        config: ApiConfig,
        store: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Request(err.to_string()))?;

        Ok(Self {
            http,
            config: Arc::new(config),
            store,
            notifier,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> Arc<dyn TokenStore> {
        self.store.clone()
    }

    /// A request builder for `path`; signing happens in `execute`.
    #[must_use]
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.config.endpoint(path))
    }

    /// Sign, send and classify a request.
    /// # Errors
    /// Returns `ApiError` for transport failures and non-success statuses, after
    /// the notifier has been called.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = self
            .sign(request)
            .build()
            .map_err(|err| ApiError::Request(err.to_string()))?;

        let span = info_span!(
            "api.request",
            http.method = %request.method(),
            url = %request.url()
        );
        let method = request.method().clone();
        let url = request.url().clone();

        let response = match self.http.execute(request).instrument(span).await {
            Ok(response) => response,
            Err(err) => {
                warn!("{method} {url} - no response: {err}");
                return Err(self.fail(ApiError::Connectivity(err)));
            }
        };

        let status = response.status();
        if status.is_success() {
            debug!("{method} {url} - {status}");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("{method} {url} - {status}, {}", sanitize_body(&body));

        Err(self.fail(ApiError::Status {
            status,
            server_message: server_message(&body),
        }))
    }

    /// Execute and decode a JSON body.
    /// # Errors
    /// Returns `ApiError` on any failure, including an undecodable body.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| self.fail(ApiError::Decode(err.to_string())))
    }

    /// Execute and discard the body.
    /// # Errors
    /// Returns `ApiError` on any failure.
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }

    /// # Errors
    /// Returns `ApiError` on any failure.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute_json(self.request(Method::GET, path)).await
    }

    /// Fetch a raw body, used for report downloads.
    /// # Errors
    /// Returns `ApiError` on any failure.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|err| self.fail(ApiError::Decode(err.to_string())))
    }

    /// # Errors
    /// Returns `ApiError` on any failure.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute_json(self.request(Method::POST, path).json(body))
            .await
    }

    /// # Errors
    /// Returns `ApiError` on any failure.
    pub async fn post_json_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.execute_empty(self.request(Method::POST, path).json(body))
            .await
    }

    /// Post a `text/plain` body, overriding the JSON default.
    /// # Errors
    /// Returns `ApiError` on any failure.
    pub async fn post_text(&self, path: &str, body: &str) -> Result<(), ApiError> {
        let request = self
            .request(Method::POST, path)
            .header(CONTENT_TYPE, "text/plain")
            .body(body.to_string());
        self.execute_empty(request).await
    }

    /// # Errors
    /// Returns `ApiError` on any failure.
    pub async fn put_json_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.execute_empty(self.request(Method::PUT, path).json(body))
            .await
    }

    /// Multipart upload; reqwest sets the boundary content type.
    /// # Errors
    /// Returns `ApiError` on any failure.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        self.execute_json(self.request(Method::POST, path).multipart(form))
            .await
    }

    /// # Errors
    /// Returns `ApiError` on any failure.
    pub async fn put_multipart(&self, path: &str, form: Form) -> Result<(), ApiError> {
        self.execute_empty(self.request(Method::PUT, path).multipart(form))
            .await
    }

    /// # Errors
    /// Returns `ApiError` on any failure.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute_empty(self.request(Method::DELETE, path)).await
    }

    // Tokens that decode to a past expiry are not sent; opaque tokens are.
    fn sign(&self, request: RequestBuilder) -> RequestBuilder {
        let Some(token) = self.store.token() else {
            debug!("no token available, sending unauthenticated request");
            return request;
        };

        match decode_claims(token.expose_secret()) {
            Ok(claims) if claims.is_expired_at(now_unix()) => {
                debug!("stored token has expired, sending unauthenticated request");
                request
            }
            _ => request.bearer_auth(token.expose_secret()),
        }
    }

    fn fail(&self, err: ApiError) -> ApiError {
        let message = err.user_message();
        self.notifier.notify(&message);
        err
    }
}
