use crate::{
    cli::globals::{GlobalArgs, Runtime},
    features::{
        analytics::client::{dashboard_summary, most_moved_products},
        products::{ImageFile, client::recent_products},
        reports::{ReportKind, client::generate_and_download},
        users::{
            ProfileSettings,
            client::{
                approved_employees, delete_user, list_employees, update_settings,
                upload_profile_picture,
            },
        },
    },
};
use anyhow::{Context, Result};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub op: Op,
}

#[derive(Debug)]
pub enum Op {
    ListEmployees,
    ApprovedEmployees,
    DeleteUser(String),
    UploadPhoto(PathBuf),
    UpdateSettings(ProfileSettings),
    Dashboard,
    Analytics,
    Report { kind: ReportKind, out: PathBuf },
}

impl Op {
    #[must_use]
    pub fn route(&self) -> &'static str {
        match self {
            Op::ListEmployees | Op::DeleteUser(_) => "/dashboard/usuario",
            Op::ApprovedEmployees => "/dashboard/usuarioVerif",
            Op::UploadPhoto(_) | Op::UpdateSettings(_) => "/dashboard/settings",
            Op::Dashboard => "/dashboard",
            Op::Analytics => "/dashboard/analytics",
            Op::Report { .. } => "/dashboard/informes",
        }
    }
}

/// # Errors
/// Returns an error when there is no valid session, the request fails or the
/// report cannot be written.
pub async fn execute(runtime: &Runtime, op: Op) -> Result<()> {
    runtime.require_session(op.route())?;
    let api = &runtime.api;

    match op {
        Op::ListEmployees => runtime.print(&list_employees(api).await?),
        Op::ApprovedEmployees => {
            let employees = approved_employees(api).await?;
            let rows: Vec<_> = employees
                .iter()
                .map(|employee| {
                    json!({
                        "id": employee.id,
                        "name": employee.name,
                        "email": employee.email,
                        "permissions": employee.effective_permissions(),
                    })
                })
                .collect();
            runtime.print(&rows)
        }
        Op::DeleteUser(id) => {
            delete_user(api, &id).await?;
            runtime.print(&json!({ "deleted": id }))
        }
        Op::UploadPhoto(path) => {
            let image = ImageFile::from_path(&path).await?;
            runtime.print(&upload_profile_picture(api, image).await?)
        }
        Op::UpdateSettings(settings) => {
            update_settings(api, &settings).await?;
            runtime.print(&json!({ "updated": true }))
        }
        Op::Dashboard => {
            let (summary, recent) =
                tokio::try_join!(dashboard_summary(api), recent_products(api))?;
            runtime.print(&json!({ "summary": summary, "recent": recent }))
        }
        Op::Analytics => runtime.print(&most_moved_products(api).await?),
        Op::Report { kind, out } => {
            let downloaded = generate_and_download(api, kind).await?;
            let path = out.join(downloaded.report.local_file_name()?);

            tokio::fs::create_dir_all(&out)
                .await
                .with_context(|| format!("failed to create {}", out.display()))?;
            tokio::fs::write(&path, &downloaded.bytes)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("report written to {}", path.display());

            runtime.print(&json!({
                "report": downloaded.report,
                "path": path.display().to_string(),
                "bytes": downloaded.bytes.len(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::routes::is_protected;

    #[test]
    fn every_operation_is_behind_the_dashboard_gate() {
        let ops = [
            Op::ListEmployees,
            Op::ApprovedEmployees,
            Op::UploadPhoto(PathBuf::from("me.png")),
            Op::UpdateSettings(ProfileSettings::default()),
            Op::Dashboard,
            Op::Analytics,
            Op::Report {
                kind: ReportKind::Pdf,
                out: PathBuf::from("."),
            },
        ];
        for op in ops {
            assert!(is_protected(op.route()), "{op:?}");
        }
    }
}
