use clap::{crate_version, Arg, ArgAction, Command};

pub fn app() -> Command {
  Command::new("colors")
    .version(crate_version!())
    .author("Brocode <bros@brocode.sh>")
    .about(
      "tiny color collection served over http. Settings are read from COLORS_CONFIG_DIR or the default config dir.
Endpoints: GET /api/colors, POST /api/colors, GET /api/colors/random",
    )
    .subcommand_required(true)
    .arg(
      Arg::new("v")
        .short('v')
        .num_args(0)
        .action(ArgAction::Count)
        .global(true)
        .help("Sets the level of verbosity"),
    )
    .arg(
      Arg::new("q")
        .short('q')
        .help("Make colors quiet")
        .action(ArgAction::SetTrue)
        .global(true)
        .num_args(0),
    )
    .subcommand(
      Command::new("serve")
        .about("Serve the color collection over http")
        .arg(
          Arg::new("listen")
            .long("listen")
            .short('l')
            .value_name("ADDR")
            .help("Socket address to bind, e.g. 0.0.0.0:8080 (default 127.0.0.1:5000)")
            .num_args(1)
            .required(false),
        )
        .arg(
          Arg::new("swagger")
            .long("swagger")
            .help("Serve the OpenAPI document at /swagger/v1/swagger.json")
            .num_args(0)
            .action(ArgAction::SetTrue),
        ),
    )
    .subcommand(Command::new("print-openapi").about("Prints the OpenAPI document of the http api."))
}
