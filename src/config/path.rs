use crate::errors::AppError;
use dirs::config_dir;
use std::env;
use std::path::PathBuf;

pub struct ColorsPaths {
  pub settings: PathBuf,
  pub base: PathBuf,
}

fn do_expand(path: PathBuf, home_dir: Option<PathBuf>) -> PathBuf {
  match (path.strip_prefix("~"), home_dir) {
    (Ok(rest), Some(home)) => home.join(rest),
    _ => path,
  }
}

pub fn expand_path(path: PathBuf) -> PathBuf {
  if path.starts_with("~") {
    do_expand(path, dirs::home_dir())
  } else {
    path
  }
}

fn settings_file_name(env: Option<String>) -> String {
  let prefix = env.map(|s| format!("{}_", s)).unwrap_or_default().replace('/', "");
  format!("{}settings.toml", prefix)
}

pub fn colors_path() -> Result<ColorsPaths, AppError> {
  let base = env::var("COLORS_CONFIG_DIR")
    .map(PathBuf::from)
    .ok()
    .map(expand_path)
    .or_else(|| {
      config_dir().map(|mut c| {
        c.push("colors");
        c
      })
    })
    .ok_or(AppError::InternalError("Cannot resolve colors config dir"))?;

  let env = env::var_os("COLORS_ENV").map(|s| s.to_string_lossy().to_string());

  let mut settings = base.clone();
  settings.push(settings_file_name(env));

  Ok(ColorsPaths { settings, base })
}
