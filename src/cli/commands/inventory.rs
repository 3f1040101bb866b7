use clap::{Arg, Command};

pub const CMD_PRODUCTS: &str = "products";
pub const CMD_CATEGORIES: &str = "categories";
pub const CMD_PROVIDERS: &str = "providers";
pub const CMD_STOCK: &str = "stock";
pub const CMD_MOVEMENTS: &str = "movements";

fn id(help: &'static str) -> Arg {
    Arg::new("id").help(help).required(true)
}

fn product_form_args(command: Command, required: bool) -> Command {
    command
        .arg(
            Arg::new("name")
                .long("name")
                .help("Product name")
                .required(required),
        )
        .arg(
            Arg::new("quantity")
                .long("quantity")
                .help("Units on hand")
                .default_value("0")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("description")
                .long("description")
                .help("Product description")
                .default_value(""),
        )
        .arg(
            Arg::new("category-id")
                .long("category-id")
                .help("Category id")
                .required(required)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("provider-id")
                .long("provider-id")
                .help("Provider id")
                .required(required)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("price")
                .long("price")
                .help("Unit price")
                .required(required)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("image")
                .long("image")
                .help("PNG, JPG or JPEG image to upload"),
        )
}

fn u32_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(u32))
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_PRODUCTS)
                .about("Manage products")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List all products"))
                .subcommand(Command::new("recent").about("List recently added products"))
                .subcommand(
                    Command::new("show")
                        .about("Show one product")
                        .arg(id("Product id")),
                )
                .subcommand(product_form_args(
                    Command::new("create").about("Create a product"),
                    true,
                ))
                .subcommand(product_form_args(
                    Command::new("update")
                        .about("Replace a product's fields")
                        .arg(id("Product id")),
                    true,
                ))
                .subcommand(
                    Command::new("delete")
                        .about("Delete a product")
                        .arg(id("Product id")),
                ),
        )
        .subcommand(
            Command::new(CMD_CATEGORIES)
                .about("Product categories")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List categories")),
        )
        .subcommand(
            Command::new(CMD_PROVIDERS)
                .about("Manage providers")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List providers"))
                .subcommand(
                    Command::new("create")
                        .about("Create a provider")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("contact").long("contact").default_value(""))
                        .arg(Arg::new("address").long("address").default_value("")),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a provider")
                        .arg(id("Provider id")),
                ),
        )
        .subcommand(
            Command::new(CMD_STOCK)
                .about("Manage stock levels")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List stock entries"))
                .subcommand(
                    Command::new("save")
                        .about("Create a stock entry, or update it when --id is given")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .help("Existing stock entry to update")
                                .value_parser(clap::value_parser!(u64)),
                        )
                        .arg(
                            Arg::new("product-id")
                                .long("product-id")
                                .required(true)
                                .value_parser(clap::value_parser!(u64)),
                        )
                        .arg(u32_arg("available", "Units available"))
                        .arg(u32_arg("minimum", "Minimum units"))
                        .arg(u32_arg("maximum", "Maximum units")),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete a stock entry")
                        .arg(id("Stock id")),
                ),
        )
        .subcommand(Command::new(CMD_MOVEMENTS).about("Show inventory movement history"))
}
