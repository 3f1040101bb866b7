//! Inventory report generation and download.

pub mod client;
pub mod types;

pub use types::{DownloadedReport, Report, ReportKind};
