pub mod admin;
pub mod auth;
pub mod inventory;
pub mod logging;

use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_COOKIE_JAR: &str = "cookie-jar";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_COMPACT: &str = "compact";
pub const ARG_QUIET: &str = "quiet";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("stockroom")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .short('u')
                .long(ARG_API_URL)
                .help("Base URL of the inventory API")
                .env(crate::api::config::API_URL_ENV)
                .default_value(crate::api::DEFAULT_API_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_COOKIE_JAR)
                .long(ARG_COOKIE_JAR)
                .help("File holding the session token (default: $HOME/.stockroom/cookies)")
                .env("STOCKROOM_COOKIE_JAR")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .short('t')
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds")
                .env("STOCKROOM_TIMEOUT")
                .default_value("30")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_COMPACT)
                .long(ARG_COMPACT)
                .help("Print JSON on a single line")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_QUIET)
                .short('q')
                .long(ARG_QUIET)
                .help("Report failed requests through the log instead of stderr")
                .env("STOCKROOM_QUIET")
                .global(true)
                .action(ArgAction::SetTrue),
        );

    let command = auth::with_subcommands(command);
    let command = inventory::with_subcommands(command);
    let command = admin::with_subcommands(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "stockroom");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("STOCKROOM_API_URL", None::<&str>),
                ("STOCKROOM_COOKIE_JAR", None),
                ("STOCKROOM_TIMEOUT", None),
            ],
            || {
                let matches = new().get_matches_from(vec!["stockroom", "session"]);

                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).cloned(),
                    Some("http://localhost:8080".to_string())
                );
                assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT).copied(), Some(30));
                assert!(matches.get_one::<String>(ARG_COOKIE_JAR).is_none());
                assert_eq!(matches.subcommand_name(), Some("session"));
            },
        );
    }

    #[test]
    fn test_env_overrides() {
        temp_env::with_vars(
            [
                ("STOCKROOM_API_URL", Some("https://inventory.tld")),
                ("STOCKROOM_COOKIE_JAR", Some("/tmp/stockroom-cookies")),
                ("STOCKROOM_TIMEOUT", Some("5")),
            ],
            || {
                let matches = new().get_matches_from(vec!["stockroom", "products", "list"]);

                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).cloned(),
                    Some("https://inventory.tld".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_COOKIE_JAR).cloned(),
                    Some("/tmp/stockroom-cookies".to_string())
                );
                assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT).copied(), Some(5));
            },
        );
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let matches = new().get_matches_from(vec![
            "stockroom",
            "dashboard",
            "--api-url",
            "http://10.0.0.2:9000",
            "--compact",
        ]);

        assert_eq!(
            matches.get_one::<String>(ARG_API_URL).cloned(),
            Some("http://10.0.0.2:9000".to_string())
        );
        assert!(matches.get_flag(ARG_COMPACT));
        assert!(!matches.get_flag(ARG_QUIET));
    }

    #[test]
    fn test_quiet_from_flag_or_env() {
        temp_env::with_vars([("STOCKROOM_QUIET", None::<&str>)], || {
            let matches = new().get_matches_from(vec!["stockroom", "products", "list", "-q"]);
            assert!(matches.get_flag(ARG_QUIET));
        });
        temp_env::with_vars([("STOCKROOM_QUIET", Some("true"))], || {
            let matches = new().get_matches_from(vec!["stockroom", "session"]);
            assert!(matches.get_flag(ARG_QUIET));
        });
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = new().try_get_matches_from(vec!["stockroom", "--timeout", "0", "session"]);
        assert_eq!(
            result.map_err(|e| e.kind()),
            Err(clap::error::ErrorKind::ValueValidation)
        );
    }

    #[test]
    fn test_login_requires_credentials() {
        temp_env::with_vars(
            [
                ("STOCKROOM_EMAIL", None::<&str>),
                ("STOCKROOM_PASSWORD", None),
            ],
            || {
                let result = new().try_get_matches_from(vec!["stockroom", "login"]);
                assert_eq!(
                    result.map_err(|e| e.kind()),
                    Err(clap::error::ErrorKind::MissingRequiredArgument)
                );
            },
        );
    }

    #[test]
    fn test_stock_save_parses_quantities() {
        let matches = new().get_matches_from(vec![
            "stockroom",
            "stock",
            "save",
            "--id",
            "3",
            "--product-id",
            "8",
            "--available",
            "12",
            "--minimum",
            "2",
            "--maximum",
            "40",
        ]);

        let Some(("stock", stock)) = matches.subcommand() else {
            panic!("expected stock subcommand");
        };
        let Some(("save", save)) = stock.subcommand() else {
            panic!("expected save subcommand");
        };
        assert_eq!(save.get_one::<u64>("id").copied(), Some(3));
        assert_eq!(save.get_one::<u32>("maximum").copied(), Some(40));
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("STOCKROOM_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["stockroom".to_string(), "session".to_string()];

                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_env() {
        for (level, expected) in [("error", 0), ("warn", 1), ("info", 2), ("debug", 3), ("trace", 4)] {
            temp_env::with_vars([("STOCKROOM_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["stockroom", "session"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(expected)
                );
            });
        }
    }
}
