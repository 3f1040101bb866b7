//! Account entry points: login, registration and password recovery. Login and
//! register return the issued token; the caller stores it through the session
//! context. Passwords and tokens must never be logged.

pub mod client;
pub mod types;
