//! Typed clients for the inventory backend, one area per module. Each area keeps
//! endpoint paths in `client.rs` and wire types in `types.rs`, so command
//! handlers stay free of request plumbing. Authorization is enforced by the API.

pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod movements;
pub mod products;
pub mod reports;
pub mod stock;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;

use crate::api::ApiError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Characters that would end or rewrite a path segment.
const RESERVED_ID_CHARS: [char; 5] = ['/', '\\', '?', '#', '%'];

/// Trim an identifier and make sure it stays a single path segment.
pub(crate) fn require_id<'a>(id: &'a str, what: &str) -> Result<&'a str, ApiError> {
    let trimmed = id.trim();
    let unusable = trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed
            .chars()
            .any(|c| c.is_control() || c.is_whitespace() || RESERVED_ID_CHARS.contains(&c));

    if unusable {
        return Err(ApiError::Invalid(format!("A valid {what} id is required.")));
    }
    Ok(trimmed)
}

/// Backend ids arrive as numbers on most resources and as strings on users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(u64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(id) => write!(formatter, "{id}"),
            EntityId::Text(id) => formatter.write_str(id),
        }
    }
}
