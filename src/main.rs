use crate::errors::AppError;
use clap::ArgMatches;
use slog::Logger;
use slog::{crit, debug, o};
use std::time::SystemTime;

fn run_serve(matches: &ArgMatches, logger: &Logger) -> Result<(), AppError> {
  let settings = config::get_settings(logger)?.with_overrides(matches.get_one::<String>("listen").cloned(), matches.get_flag("swagger"));
  debug!(logger, "Settings resolved"; "settings" => format!("{:?}", settings));
  let runtime = tokio::runtime::Runtime::new()?;
  runtime.block_on(server::serve(&settings, logger))
}

fn print_openapi() -> Result<(), AppError> {
  let document = serde_json::to_string_pretty(&server::openapi::document())?;
  println!("{}", document);
  Ok(())
}

fn main() {
  let matches = crate::app::app().get_matches();

  let logger = match util::logger_from_verbosity(matches.get_count("v"), matches.get_flag("q")) {
    Ok(logger) => logger,
    Err(error) => {
      eprintln!("{}", error);
      std::process::exit(1)
    }
  };

  let (subcommand_name, subcommand_matches) = matches.subcommand().expect("subcommand required by clap.rs");
  let subcommand_logger = logger.new(o!("command" => subcommand_name.to_owned()));

  let now = SystemTime::now();
  let result: Result<(), AppError> = match subcommand_name {
    "serve" => run_serve(subcommand_matches, &subcommand_logger),
    "print-openapi" => print_openapi(),
    _ => Err(AppError::InternalError("Command not implemented")),
  };

  match result {
    Ok(()) => {
      let elapsed = now.elapsed().map(|d| format!("{}sec", d.as_secs())).unwrap_or_default();
      debug!(subcommand_logger, "Done"; "time" => elapsed)
    }
    Err(error) => {
      crit!(subcommand_logger, "Error running command"; "error" => format!("{}", error));
      std::process::exit(1)
    }
  }
}

mod app;
mod color;
mod config;
mod errors;
mod server;
mod store;
mod util;
