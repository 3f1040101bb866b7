//! Client-side session gate for protected work.
//!
//! The guard runs one read-decode-compare cycle over the stored token:
//! `Unchecked -> Checking -> {Valid, Invalid}`. An invalid session removes the
//! token and navigates to the login route with the expired indicator. This is a
//! UX check only; the API enforces access.

use super::{
    store::TokenStore,
    token::{decode_claims, now_unix},
};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const LOGIN_ROUTE: &str = "/auth/login";
pub const EXPIRED_LOGIN_ROUTE: &str = "/auth/login?expired=1";

/// Receives route changes issued by the session layer.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn navigate(&self, route: &str) {
        self(route);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Missing,
    Malformed,
    Expired,
    SignedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Unchecked,
    Checking,
    Valid { expires_at: i64 },
    Invalid(InvalidReason),
}

impl SessionStatus {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// `Valid` and `Invalid` end a check; the other states are transient.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Valid { .. } | Self::Invalid(_))
    }
}

/// Derive the session status from the store without side effects.
#[must_use]
pub fn evaluate(store: &dyn TokenStore, now: i64) -> SessionStatus {
    let Some(token) = store.token() else {
        return SessionStatus::Invalid(InvalidReason::Missing);
    };

    match decode_claims(token.expose_secret()) {
        Ok(claims) if claims.is_expired_at(now) => SessionStatus::Invalid(InvalidReason::Expired),
        Ok(claims) => SessionStatus::Valid {
            expires_at: claims.exp,
        },
        Err(err) => {
            debug!("token decode failed: {err}");
            SessionStatus::Invalid(InvalidReason::Malformed)
        }
    }
}

pub struct SessionGuard {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    state: SessionStatus,
}

impl SessionGuard {
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            store,
            navigator,
            state: SessionStatus::Unchecked,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionStatus {
        &self.state
    }

    /// Run the check against the current wall clock.
    pub fn check(&mut self) -> &SessionStatus {
        self.check_at(now_unix())
    }

    /// Run the check as of `now` (seconds since epoch) and apply side effects.
    pub fn check_at(&mut self, now: i64) -> &SessionStatus {
        self.state = SessionStatus::Checking;

        let outcome = evaluate(self.store.as_ref(), now);
        if let SessionStatus::Invalid(reason) = &outcome {
            self.invalidate(*reason);
        }

        self.state = outcome;
        &self.state
    }

    /// Run `content` only when the session checks out as valid.
    pub fn render<T>(&mut self, content: impl FnOnce() -> T) -> Option<T> {
        if !self.state.is_terminal() {
            self.check();
        }
        self.state.is_valid().then(content)
    }

    fn invalidate(&self, reason: InvalidReason) {
        if reason != InvalidReason::Missing {
            if let Err(err) = self.store.remove_token() {
                warn!("Failed to remove stale token: {err}");
            }
        }
        info!("session invalid ({reason:?}), redirecting to login");
        self.navigator.navigate(EXPIRED_LOGIN_ROUTE);
    }
}
