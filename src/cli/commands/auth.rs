use clap::{Arg, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_FORGOT_PASSWORD: &str = "forgot-password";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_SESSION: &str = "session";

fn email() -> Arg {
    Arg::new("email")
        .short('e')
        .long("email")
        .help("Account email")
        .env("STOCKROOM_EMAIL")
        .required(true)
}

fn password() -> Arg {
    Arg::new("password")
        .short('p')
        .long("password")
        .help("Account password (at least 6 characters)")
        .env("STOCKROOM_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Sign in and store the session token")
                .arg(email())
                .arg(password()),
        )
        .subcommand(
            Command::new(CMD_REGISTER)
                .about("Create an account and sign in")
                .arg(
                    Arg::new("full-name")
                        .short('n')
                        .long("full-name")
                        .help("Full name (at least 3 characters)")
                        .required(true),
                )
                .arg(email())
                .arg(password()),
        )
        .subcommand(
            Command::new(CMD_FORGOT_PASSWORD)
                .about("Request password reset instructions")
                .arg(email()),
        )
        .subcommand(Command::new(CMD_LOGOUT).about("Remove the stored session token"))
        .subcommand(Command::new(CMD_SESSION).about("Check the stored session token"))
}
