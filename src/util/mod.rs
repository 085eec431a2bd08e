use crate::errors::AppError;

use slog::Logger;
use slog::debug;
use sloggers::Build;
use sloggers::terminal::{Destination, TerminalLoggerBuilder};
use sloggers::types::{Format, Severity};

fn severity_from_verbosity(verbosity: u8, quiet: bool) -> Severity {
  match verbosity {
    _ if quiet => Severity::Error,
    0 => Severity::Info,
    1 => Severity::Debug,
    _ => Severity::Trace,
  }
}

pub fn logger_from_verbosity(verbosity: u8, quiet: bool) -> Result<Logger, AppError> {
  let log_level = severity_from_verbosity(verbosity, quiet);

  let mut logger_builder = TerminalLoggerBuilder::new();
  logger_builder.level(log_level);
  logger_builder.destination(Destination::Stderr);
  logger_builder.format(Format::Full);

  let logger = logger_builder
    .build()
    .map_err(|e| AppError::RuntimeError(format!("Could not set up logging: {}", e)))?;

  debug!(logger, "Logger ready" ; "level" => format!("{:?}", log_level));
  Ok(logger)
}
