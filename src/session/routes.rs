//! Route-level gate: everything under `/dashboard` needs a token cookie.
//!
//! This rule checks presence only and never decodes the token. It runs before
//! the session guard and is independent of it.

use super::{guard::EXPIRED_LOGIN_ROUTE, store::TokenStore};

pub const PROTECTED_PREFIX: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Continue,
    Redirect(&'static str),
}

#[must_use]
pub fn is_protected(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path == PROTECTED_PREFIX
        || path
            .strip_prefix(PROTECTED_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[must_use]
pub fn route_decision(path: &str, store: &dyn TokenStore) -> RouteDecision {
    if is_protected(path) && store.token().is_none() {
        RouteDecision::Redirect(EXPIRED_LOGIN_ROUTE)
    } else {
        RouteDecision::Continue
    }
}
