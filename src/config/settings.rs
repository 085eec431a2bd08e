use serde::{Deserialize, Serialize};

pub const DEFAULT_LISTEN: &str = "127.0.0.1:5000";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
  pub listen: Option<String>,
  pub swagger: Option<bool>,
}

impl Settings {
  pub fn get_listen_or_default(&self) -> String {
    self.listen.clone().unwrap_or_else(|| DEFAULT_LISTEN.to_owned())
  }

  pub fn swagger_enabled(&self) -> bool {
    self.swagger.unwrap_or(false)
  }

  /// Values given on the command line win over the settings file.
  pub fn with_overrides(self, listen: Option<String>, swagger: bool) -> Settings {
    Settings {
      listen: listen.or(self.listen),
      swagger: if swagger { Some(true) } else { self.swagger },
    }
  }

  #[cfg(test)]
  pub fn example() -> Settings {
    Settings {
      listen: Some("0.0.0.0:8080".to_owned()),
      swagger: Some(true),
    }
  }
}
