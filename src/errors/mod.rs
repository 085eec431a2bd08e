use std::error::Error;
use std::fmt;
use std::io;
use std::net::AddrParseError;

#[derive(Debug)]
pub enum AppError {
  IO(io::Error),
  RuntimeError(String),
  BadJson(serde_json::Error),
  InternalError(&'static str),
  TomlDeError(toml::de::Error),
  AddrParse(AddrParseError),
}

macro_rules! app_error_from {
  ($error: ty, $app_error: ident) => {
    impl From<$error> for AppError {
      fn from(err: $error) -> AppError {
        AppError::$app_error(err)
      }
    }
  };
}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      AppError::IO(ref err) => write!(f, "IO error: {}", err),
      AppError::RuntimeError(ref str) => write!(f, "Runtime error: {}", str),
      AppError::BadJson(ref err) => write!(f, "JSON error: {}", err),
      AppError::InternalError(str) => write!(f, "Internal error: {}", str),
      AppError::TomlDeError(ref err) => write!(f, "toml read error: {}", err),
      AppError::AddrParse(ref err) => write!(f, "Invalid listen address: {}", err),
    }
  }
}

impl Error for AppError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match *self {
      AppError::IO(ref err) => Some(err),
      AppError::RuntimeError(_) | AppError::InternalError(_) => None,
      AppError::BadJson(ref err) => Some(err),
      AppError::TomlDeError(ref err) => Some(err),
      AppError::AddrParse(ref err) => Some(err),
    }
  }
}

app_error_from!(io::Error, IO);
app_error_from!(serde_json::Error, BadJson);
app_error_from!(toml::de::Error, TomlDeError);
app_error_from!(AddrParseError, AddrParse);
