use crate::api::ApiError;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Pdf,
    Excel,
}

impl ReportKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Pdf => "pdf",
            ReportKind::Excel => "excel",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata returned when the backend finishes generating a report.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: u64,
    #[serde(default)]
    pub report_name: String,
    pub filename: String,
    #[serde(default)]
    pub report_type: Option<ReportKind>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Report {
    /// Final path component of `filename`, safe to join onto a local directory.
    /// # Errors
    /// Returns `ApiError::Invalid` when no usable file name remains.
    pub fn local_file_name(&self) -> Result<String, ApiError> {
        Path::new(&self.filename)
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                ApiError::Invalid(format!("The report file name {:?} is not usable.", self.filename))
            })
    }
}

#[derive(Clone, Debug)]
pub struct DownloadedReport {
    pub report: Report,
    pub bytes: Vec<u8>,
}
