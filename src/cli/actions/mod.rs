pub mod admin;
pub mod auth;
pub mod inventory;

// Internal "interpreter" for `Action`.
mod run;

use crate::cli::globals::GlobalArgs;

#[derive(Debug)]
pub enum Action {
    Auth(auth::Args),
    Inventory(inventory::Args),
    Admin(admin::Args),
}

impl Action {
    #[must_use]
    pub fn globals(&self) -> &GlobalArgs {
        match self {
            Action::Auth(args) => &args.globals,
            Action::Inventory(args) => &args.globals,
            Action::Admin(args) => &args.globals,
        }
    }

    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
