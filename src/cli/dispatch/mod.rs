use crate::{
    cli::{
        actions::{Action, admin, auth, inventory},
        commands::{
            ARG_API_URL, ARG_COMPACT, ARG_COOKIE_JAR, ARG_QUIET, ARG_TIMEOUT,
            admin::{CMD_ANALYTICS, CMD_DASHBOARD, CMD_REPORT, CMD_USERS},
            auth::{CMD_FORGOT_PASSWORD, CMD_LOGIN, CMD_LOGOUT, CMD_REGISTER, CMD_SESSION},
            inventory::{CMD_CATEGORIES, CMD_MOVEMENTS, CMD_PRODUCTS, CMD_PROVIDERS, CMD_STOCK},
        },
        globals::{GlobalArgs, default_cookie_jar},
    },
    features::{
        auth::types::{LoginRequest, RegisterRequest},
        catalog::NewProvider,
        products::ProductForm,
        reports::ReportKind,
        stock::StockRequest,
        users::ProfileSettings,
    },
};
use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use std::{path::PathBuf, time::Duration};

fn string(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: {id}"))
}

fn copied<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Result<T> {
    matches
        .get_one::<T>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

fn subcommand(matches: &ArgMatches) -> Result<(&str, &ArgMatches)> {
    matches
        .subcommand()
        .ok_or_else(|| anyhow!("a subcommand is required"))
}

fn globals(matches: &ArgMatches) -> Result<GlobalArgs> {
    let api_url = string(matches, ARG_API_URL)?;
    let cookie_jar = matches
        .get_one::<String>(ARG_COOKIE_JAR)
        .map_or_else(default_cookie_jar, PathBuf::from);

    let mut globals = GlobalArgs::new(api_url, cookie_jar);
    if let Some(seconds) = matches.get_one::<u64>(ARG_TIMEOUT) {
        globals.timeout = Duration::from_secs(*seconds);
    }
    globals.compact = matches.get_flag(ARG_COMPACT);
    globals.quiet = matches.get_flag(ARG_QUIET);
    Ok(globals)
}

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = globals(matches)?;
    let (name, sub) = subcommand(matches)?;

    let action = match name {
        CMD_LOGIN | CMD_REGISTER | CMD_FORGOT_PASSWORD | CMD_LOGOUT | CMD_SESSION => {
            Action::Auth(auth::Args {
                globals,
                op: auth_op(name, sub)?,
            })
        }
        CMD_PRODUCTS | CMD_CATEGORIES | CMD_PROVIDERS | CMD_STOCK | CMD_MOVEMENTS => {
            Action::Inventory(inventory::Args {
                globals,
                op: inventory_op(name, sub)?,
            })
        }
        CMD_USERS | CMD_DASHBOARD | CMD_ANALYTICS | CMD_REPORT => Action::Admin(admin::Args {
            globals,
            op: admin_op(name, sub)?,
        }),
        other => return Err(anyhow!("unknown command: {other}")),
    };

    Ok(action)
}

fn auth_op(name: &str, matches: &ArgMatches) -> Result<auth::Op> {
    Ok(match name {
        CMD_LOGIN => auth::Op::Login(LoginRequest {
            email: string(matches, "email")?,
            password: string(matches, "password")?,
        }),
        CMD_REGISTER => auth::Op::Register(RegisterRequest {
            full_name: string(matches, "full-name")?,
            email: string(matches, "email")?,
            password: string(matches, "password")?,
        }),
        CMD_FORGOT_PASSWORD => auth::Op::ForgotPassword {
            email: string(matches, "email")?,
        },
        CMD_LOGOUT => auth::Op::Logout,
        _ => auth::Op::Session,
    })
}

fn product_input(matches: &ArgMatches) -> Result<inventory::ProductInput> {
    Ok(inventory::ProductInput {
        form: ProductForm {
            name: string(matches, "name")?,
            quantity: copied(matches, "quantity")?,
            description: string(matches, "description")?,
            category_id: copied(matches, "category-id")?,
            provider_id: copied(matches, "provider-id")?,
            price: copied(matches, "price")?,
            image: None,
        },
        image: matches.get_one::<String>("image").map(PathBuf::from),
    })
}

fn inventory_op(name: &str, matches: &ArgMatches) -> Result<inventory::Op> {
    use inventory::Op;

    if name == CMD_MOVEMENTS {
        return Ok(Op::Movements);
    }

    let (action, sub) = subcommand(matches)?;
    let op = match (name, action) {
        (CMD_PRODUCTS, "list") => Op::ListProducts,
        (CMD_PRODUCTS, "recent") => Op::RecentProducts,
        (CMD_PRODUCTS, "show") => Op::ShowProduct(string(sub, "id")?),
        (CMD_PRODUCTS, "create") => Op::CreateProduct(product_input(sub)?),
        (CMD_PRODUCTS, "update") => Op::UpdateProduct {
            id: string(sub, "id")?,
            input: product_input(sub)?,
        },
        (CMD_PRODUCTS, "delete") => Op::DeleteProduct(string(sub, "id")?),
        (CMD_CATEGORIES, "list") => Op::ListCategories,
        (CMD_PROVIDERS, "list") => Op::ListProviders,
        (CMD_PROVIDERS, "create") => Op::CreateProvider(NewProvider {
            nombre: string(sub, "name")?,
            contacto: string(sub, "contact")?,
            direccion: string(sub, "address")?,
        }),
        (CMD_PROVIDERS, "delete") => Op::DeleteProvider(string(sub, "id")?),
        (CMD_STOCK, "list") => Op::ListStock,
        (CMD_STOCK, "save") => {
            let request = StockRequest::new(
                copied(sub, "product-id")?,
                copied(sub, "available")?,
                copied(sub, "minimum")?,
                copied(sub, "maximum")?,
            );
            match sub.get_one::<u64>("id") {
                Some(id) => Op::SaveStock(request.with_id(*id)),
                None => Op::SaveStock(request),
            }
        }
        (CMD_STOCK, "delete") => Op::DeleteStock(string(sub, "id")?),
        (group, other) => return Err(anyhow!("unknown command: {group} {other}")),
    };
    Ok(op)
}

fn admin_op(name: &str, matches: &ArgMatches) -> Result<admin::Op> {
    use admin::Op;

    match name {
        CMD_DASHBOARD => return Ok(Op::Dashboard),
        CMD_ANALYTICS => return Ok(Op::Analytics),
        _ => {}
    }

    let (action, sub) = subcommand(matches)?;
    let op = match (name, action) {
        (CMD_USERS, "list") => Op::ListEmployees,
        (CMD_USERS, "approved") => Op::ApprovedEmployees,
        (CMD_USERS, "delete") => Op::DeleteUser(string(sub, "id")?),
        (CMD_USERS, "photo") => Op::UploadPhoto(PathBuf::from(string(sub, "image")?)),
        (CMD_USERS, "settings") => Op::UpdateSettings(ProfileSettings {
            name: sub.get_one::<String>("name").cloned(),
            language: sub.get_one::<String>("language").cloned(),
            notifications: sub.get_one::<bool>("notifications").copied(),
            password: sub.get_one::<String>("new-password").cloned(),
        }),
        (CMD_REPORT, "pdf" | "excel") => Op::Report {
            kind: if action == "pdf" {
                ReportKind::Pdf
            } else {
                ReportKind::Excel
            },
            out: PathBuf::from(string(sub, "out")?),
        },
        (group, other) => return Err(anyhow!("unknown command: {group} {other}")),
    };
    Ok(op)
}
