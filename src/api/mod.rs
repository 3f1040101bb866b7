//! HTTP access to the inventory backend: configuration, the authenticated
//! client, the failure taxonomy and the notification seam.

pub mod client;
pub mod config;
pub mod errors;
pub mod notify;

pub use client::ApiClient;
pub use config::{ApiConfig, ConfigError, DEFAULT_API_URL};
pub use errors::{ApiError, FailureKind};
pub use notify::{ConsoleNotifier, Notifier, RecordingNotifier, TracingNotifier};
