use crate::cli::actions::{Action, admin, auth, inventory};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    let runtime = action.globals().connect()?;

    match action {
        Action::Auth(args) => auth::execute(&runtime, args.op).await,
        Action::Inventory(args) => inventory::execute(&runtime, args.op).await,
        Action::Admin(args) => admin::execute(&runtime, args.op).await,
    }
}
