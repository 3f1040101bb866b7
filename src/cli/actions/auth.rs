use crate::{
    cli::globals::{GlobalArgs, Runtime},
    features::auth::{
        client::{forgot_password, login, logout, register},
        types::{LoginRequest, RegisterRequest},
    },
    session::{InvalidReason, SessionStatus},
};
use anyhow::{Context, Result, bail};
use secrecy::SecretString;
use serde_json::{Value, json};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub op: Op,
}

#[derive(Debug)]
pub enum Op {
    Login(LoginRequest),
    Register(RegisterRequest),
    ForgotPassword { email: String },
    Logout,
    Session,
}

fn status_json(status: &SessionStatus) -> Value {
    match status {
        SessionStatus::Valid { expires_at } => {
            json!({ "authenticated": true, "expiresAt": expires_at })
        }
        SessionStatus::Invalid(reason) => json!({
            "authenticated": false,
            "reason": match reason {
                InvalidReason::Missing => "missing",
                InvalidReason::Malformed => "malformed",
                InvalidReason::Expired => "expired",
                InvalidReason::SignedOut => "signed-out",
            }
        }),
        SessionStatus::Unchecked | SessionStatus::Checking => json!({ "authenticated": false }),
    }
}

fn store_token(runtime: &Runtime, token: SecretString) -> Result<()> {
    let status = runtime
        .session
        .sign_in(token)
        .context("failed to store the session token")?;
    if !status.is_valid() {
        bail!("the server returned an unusable session token");
    }
    info!("signed in");
    runtime.print(&status_json(&status))
}

/// # Errors
/// Returns an error if the request fails or the session cannot be stored.
pub async fn execute(runtime: &Runtime, op: Op) -> Result<()> {
    match op {
        Op::Login(request) => {
            let token = login(&runtime.api, &request).await?;
            store_token(runtime, token)
        }
        Op::Register(request) => {
            let token = register(&runtime.api, &request).await?;
            store_token(runtime, token)
        }
        Op::ForgotPassword { email } => {
            forgot_password(&runtime.api, &email).await?;
            runtime.print(&json!({ "sent": true, "email": email.trim() }))
        }
        Op::Logout => {
            logout(&runtime.session).context("failed to remove the session token")?;
            runtime.print(&status_json(&runtime.session.status()))
        }
        Op::Session => {
            let status = runtime.session.refresh();
            runtime.print(&status_json(&status))
        }
    }
}
