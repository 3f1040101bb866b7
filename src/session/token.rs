//! Unverified JWT claim decoding for client-side expiry checks.
//!
//! The signature is never checked here. The decoded `exp` only decides whether
//! the client should bother sending the token; the backend stays authoritative.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token format")]
    Format,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
}

/// Claims read from the token payload. Only `exp` is required.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub exp: i64,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Claims {
    /// A token expiring exactly at `now` is already expired.
    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }
}

/// Decode the payload segment of a compact JWT (`header.payload.signature`).
/// # Errors
/// Returns an error if the token does not have three segments, the payload is not
/// base64url, or the JSON lacks a numeric `exp`.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.trim().split('.');
    let (Some(header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Format);
    };

    if header.is_empty() || payload.is_empty() {
        return Err(TokenError::Format);
    }

    // Some issuers keep the `=` padding.
    let payload = payload.trim_end_matches('=');
    let bytes = Base64UrlUnpadded::decode_vec(payload).map_err(|_| TokenError::Base64)?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Seconds since the Unix epoch.
#[must_use]
pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_with(payload: &serde_json::Value) -> String {
        let header = Base64UrlUnpadded::encode_string(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = Base64UrlUnpadded::encode_string(payload.to_string().as_bytes());
        format!("{header}.{body}.c2lnbmF0dXJl")
    }

    #[test]
    fn decodes_exp_and_optional_claims() {
        let token = token_with(&json!({ "exp": 1_700_000_000, "sub": "ana@example.com" }));
        let claims = decode_claims(&token).unwrap();

        assert_eq!(claims.exp, 1_700_000_000);
        assert_eq!(claims.sub.as_deref(), Some("ana@example.com"));
        assert_eq!(claims.role, None);
    }

    #[test]
    fn tolerates_padded_payload() {
        let token = token_with(&json!({ "exp": 42 }));
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        parts[1].push_str("==");

        assert_eq!(decode_claims(&parts.join(".")).unwrap().exp, 42);
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(decode_claims("abc"), Err(TokenError::Format)));
        assert!(matches!(decode_claims("a.b"), Err(TokenError::Format)));
        assert!(matches!(decode_claims("a.b.c.d"), Err(TokenError::Format)));
        assert!(matches!(decode_claims(".b.c"), Err(TokenError::Format)));
    }

    #[test]
    fn rejects_bad_base64_and_missing_exp() {
        assert!(matches!(decode_claims("a.!!!.c"), Err(TokenError::Base64)));

        let token = token_with(&json!({ "sub": "nobody" }));
        assert!(matches!(decode_claims(&token), Err(TokenError::Json(_))));
    }

    #[test]
    fn expiry_is_inclusive() {
        let claims = Claims {
            exp: 100,
            sub: None,
            role: None,
        };

        assert!(claims.is_expired_at(100));
        assert!(claims.is_expired_at(101));
        assert!(!claims.is_expired_at(99));
    }
}
