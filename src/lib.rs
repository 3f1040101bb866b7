//! # Stockroom
//!
//! `stockroom` is a client for the inventory backend: products, categories,
//! providers, stock levels, movement history, employees, analytics and reports.
//!
//! ## Core pieces
//!
//! 1. **Client factory:** [`api::ApiClient`] is built once per process. Every
//!    request reads the `token` entry from the [`session::TokenStore`] and, when
//!    present, sends it as `Authorization: Bearer <token>`. Failed requests are
//!    translated into a plain-language message that is handed to the injected
//!    [`api::Notifier`] exactly once, and the error is still returned to the caller.
//! 2. **Session guard:** [`session::SessionGuard`] decodes the token's `exp` claim
//!    and, when the token is missing, malformed or expired, removes it and
//!    navigates to the login route with the expired indicator.
//! 3. **Session context:** [`session::SessionContext`] is the single source of
//!    truth for session validity; consumers subscribe instead of re-deriving it.
//!
//! The client-side checks are a convenience. Authorization is enforced by the
//! backend, and token material must never be logged.

pub mod api;
pub mod cli;
pub mod features;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
