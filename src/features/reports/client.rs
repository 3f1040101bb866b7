use crate::{
    api::{ApiClient, ApiError},
    features::{
        reports::types::{DownloadedReport, Report, ReportKind},
        require_id,
    },
};
use serde_json::json;

const REPORTS_PATH: &str = "/api/inventory-reports";

/// # Errors
/// Returns `ApiError` on any request failure.
pub async fn generate_report(api: &ApiClient, kind: ReportKind) -> Result<Report, ApiError> {
    api.post_json(&format!("{REPORTS_PATH}/generate-{kind}"), &json!({}))
        .await
}

/// # Errors
/// Returns `ApiError::Invalid` for an unusable file name, otherwise any request
/// failure.
pub async fn download_report(api: &ApiClient, filename: &str) -> Result<Vec<u8>, ApiError> {
    let filename = require_id(filename, "report file")?;
    api.get_bytes(&format!("{REPORTS_PATH}/download/{filename}"))
        .await
}

/// Generate a report and fetch its bytes using the file name the backend returns.
/// # Errors
/// Returns `ApiError` if either request fails.
pub async fn generate_and_download(
    api: &ApiClient,
    kind: ReportKind,
) -> Result<DownloadedReport, ApiError> {
    let report = generate_report(api, kind).await?;
    let bytes = download_report(api, &report.filename).await?;
    Ok(DownloadedReport { report, bytes })
}
