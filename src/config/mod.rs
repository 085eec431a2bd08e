use crate::errors::AppError;
use slog::Logger;
use slog::{debug, trace};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub mod path;
pub mod settings;

pub use settings::Settings;

fn parse_settings(raw: &str) -> Result<Settings, AppError> {
  toml::from_str(raw).map_err(AppError::TomlDeError)
}

pub fn read_settings(path: &Path, logger: &Logger) -> Result<Settings, AppError> {
  match fs::read_to_string(path) {
    Ok(raw) => {
      debug!(logger, "Reading settings"; "path" => path.display().to_string());
      parse_settings(&raw)
    }
    Err(ref err) if err.kind() == ErrorKind::NotFound => {
      debug!(logger, "No settings file, using defaults"; "path" => path.display().to_string());
      Ok(Settings::default())
    }
    Err(err) => Err(AppError::RuntimeError(format!("Could not read settings file {}: {}", path.display(), err))),
  }
}

pub fn get_settings(logger: &Logger) -> Result<Settings, AppError> {
  let paths = path::colors_path()?;
  trace!(logger, "Resolved config dir"; "base" => paths.base.display().to_string());
  read_settings(&paths.settings, logger)
}
