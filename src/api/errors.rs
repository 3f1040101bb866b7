//! Failure taxonomy for API calls and the status-to-message table.
//!
//! Every failed request maps to one plain-language message. Raw status codes and
//! response bodies stay in logs and are never part of the user-facing text.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

pub const CONNECTIVITY_MESSAGE: &str =
    "We could not reach the server. Check your internet connection.";
pub const VALIDATION_MESSAGE: &str =
    "The information you sent is incorrect. Please review the fields.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";
pub const NOT_FOUND_MESSAGE: &str = "The requested resource was not found.";
pub const SERVER_ERROR_MESSAGE: &str =
    "There was a problem on the server. Please try again later.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please contact support.";

/// Maximum number of body characters kept for logs.
const MAX_BODY_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Connectivity,
    Validation,
    Unauthorized,
    NotFound,
    Server,
    Unclassified,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (refused, DNS, TLS, timeout).
    #[error("unable to reach the server: {0}")]
    Connectivity(#[source] reqwest::Error),
    #[error("request failed ({status})")]
    Status {
        status: StatusCode,
        /// `message` field of the JSON error body, when the server sent one.
        server_message: Option<String>,
    },
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Invalid(String),
    #[error("failed to build request: {0}")]
    Request(String),
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Connectivity(_) => FailureKind::Connectivity,
            Self::Status { status, .. } => match status.as_u16() {
                400 => FailureKind::Validation,
                401 => FailureKind::Unauthorized,
                404 => FailureKind::NotFound,
                500 => FailureKind::Server,
                _ => FailureKind::Unclassified,
            },
            Self::Decode(_) | Self::Invalid(_) | Self::Request(_) => FailureKind::Unclassified,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Plain-language text for the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Connectivity(_) => CONNECTIVITY_MESSAGE.to_string(),
            Self::Status {
                status,
                server_message,
            } => message_for_status(status.as_u16(), server_message.as_deref()),
            Self::Invalid(message) => message.clone(),
            Self::Decode(_) | Self::Request(_) => UNEXPECTED_MESSAGE.to_string(),
        }
    }
}

/// Fixed table first, then the server-provided message, then the generic text.
#[must_use]
pub fn message_for_status(status: u16, server_message: Option<&str>) -> String {
    let mapped = match status {
        400 => Some(VALIDATION_MESSAGE),
        401 => Some(SESSION_EXPIRED_MESSAGE),
        404 => Some(NOT_FOUND_MESSAGE),
        500 => Some(SERVER_ERROR_MESSAGE),
        _ => None,
    };

    mapped
        .or_else(|| server_message.map(str::trim).filter(|message| !message.is_empty()))
        .unwrap_or(UNEXPECTED_MESSAGE)
        .to_string()
}

/// Pull a non-empty string `message` out of a JSON error body.
#[must_use]
pub fn server_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    json.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// Trim and truncate a response body before it reaches the logs.
#[must_use]
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "<empty>".to_string()
    } else {
        trimmed.chars().take(MAX_BODY_CHARS).collect()
    }
}
