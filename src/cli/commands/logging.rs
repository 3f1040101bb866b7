use clap::{Arg, ArgAction, Command, builder::ValueParser};

pub const ARG_VERBOSITY: &str = "verbosity";
pub const ARG_LOG_FORMAT: &str = "log-format";

pub const LOG_FORMAT_PRETTY: &str = "pretty";
pub const LOG_FORMAT_JSON: &str = "json";

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Log detail on stderr, -v per step: WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("STOCKROOM_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .arg(
            Arg::new(ARG_LOG_FORMAT)
                .long(ARG_LOG_FORMAT)
                .help("Log line format on stderr")
                .env("STOCKROOM_LOG_FORMAT")
                .global(true)
                .default_value(LOG_FORMAT_PRETTY)
                .value_parser([LOG_FORMAT_PRETTY, LOG_FORMAT_JSON]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(level: &str) -> Result<u8, clap::error::ErrorKind> {
        Command::new("stockroom")
            .arg(Arg::new("level").value_parser(validator_log_level()))
            .try_get_matches_from(["stockroom", level])
            .map(|matches| matches.get_one::<u8>("level").copied().unwrap_or_default())
            .map_err(|e| e.kind())
    }

    #[test]
    fn test_validator_accepts_names_and_numbers() {
        assert_eq!(parse("WARN"), Ok(1));
        assert_eq!(parse("trace"), Ok(4));
        assert_eq!(parse("5"), Ok(5));
    }

    #[test]
    fn test_validator_rejects_unknown_levels() {
        assert_eq!(parse("6"), Err(clap::error::ErrorKind::ValueValidation));
        assert_eq!(parse("loud"), Err(clap::error::ErrorKind::ValueValidation));
    }

    #[test]
    fn test_log_format() {
        temp_env::with_vars([("STOCKROOM_LOG_FORMAT", None::<&str>)], || {
            let matches = with_args(Command::new("stockroom")).get_matches_from(["stockroom"]);
            assert_eq!(
                matches.get_one::<String>(ARG_LOG_FORMAT).map(String::as_str),
                Some(LOG_FORMAT_PRETTY)
            );

            let result = with_args(Command::new("stockroom"))
                .try_get_matches_from(["stockroom", "--log-format", "xml"]);
            assert_eq!(
                result.map_err(|e| e.kind()),
                Err(clap::error::ErrorKind::InvalidValue)
            );
        });

        temp_env::with_vars([("STOCKROOM_LOG_FORMAT", Some("json"))], || {
            let matches = with_args(Command::new("stockroom")).get_matches_from(["stockroom"]);
            assert_eq!(
                matches.get_one::<String>(ARG_LOG_FORMAT).map(String::as_str),
                Some(LOG_FORMAT_JSON)
            );
        });
    }
}
