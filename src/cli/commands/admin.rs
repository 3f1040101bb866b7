use clap::{Arg, Command};

pub const CMD_USERS: &str = "users";
pub const CMD_DASHBOARD: &str = "dashboard";
pub const CMD_ANALYTICS: &str = "analytics";
pub const CMD_REPORT: &str = "report";

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    let out = Arg::new("out")
        .short('o')
        .long("out")
        .help("Directory to write the report into")
        .default_value(".");

    command
        .subcommand(
            Command::new(CMD_USERS)
                .about("Employee accounts and profile settings")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List employees"))
                .subcommand(Command::new("approved").about("List approved employees"))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a user")
                        .arg(Arg::new("id").help("User id").required(true)),
                )
                .subcommand(
                    Command::new("photo")
                        .about("Upload a new profile picture")
                        .arg(
                            Arg::new("image")
                                .help("PNG, JPG or JPEG image")
                                .required(true),
                        ),
                )
                .subcommand(
                    Command::new("settings")
                        .about("Update profile settings")
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("language").long("language"))
                        .arg(
                            Arg::new("notifications")
                                .long("notifications")
                                .value_parser(clap::value_parser!(bool)),
                        )
                        .arg(
                            Arg::new("new-password")
                                .long("new-password")
                                .env("STOCKROOM_NEW_PASSWORD")
                                .hide_env_values(true),
                        ),
                ),
        )
        .subcommand(Command::new(CMD_DASHBOARD).about("Show dashboard counters"))
        .subcommand(Command::new(CMD_ANALYTICS).about("Show the most moved products"))
        .subcommand(
            Command::new(CMD_REPORT)
                .about("Generate and download an inventory report")
                .subcommand_required(true)
                .subcommand(Command::new("pdf").about("PDF report").arg(out.clone()))
                .subcommand(Command::new("excel").about("Excel report").arg(out)),
        )
}
