//! Dashboard counters and movement analytics.

pub mod client;
pub mod types;

pub use types::{DashboardSummary, MostMovedProduct};
