use regex::Regex;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static HEX_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex code pattern compiles"));

/// A named color as stored and served.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColorItem {
  pub name: String,
  pub hex_code: String,
}

impl ColorItem {
  pub fn new(name: &str, hex_code: &str) -> ColorItem {
    ColorItem {
      name: name.to_owned(),
      hex_code: hex_code.to_owned(),
    }
  }

  pub fn validate(&self) -> Result<(), InvalidColor> {
    if self.name.trim().is_empty() {
      Err(InvalidColor::MissingName)
    } else if !is_valid_hex(Some(self.hex_code.as_str())) {
      Err(InvalidColor::InvalidHexCode)
    } else {
      Ok(())
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidColor {
  MissingName,
  InvalidHexCode,
}

impl fmt::Display for InvalidColor {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      InvalidColor::MissingName => write!(f, "Color name is required"),
      InvalidColor::InvalidHexCode => write!(f, "Invalid hex code format. Use format #RRGGBB (e.g., #FF0000)"),
    }
  }
}

/// `#` followed by exactly six hex digits, nothing around it.
pub fn is_valid_hex(hex_code: Option<&str>) -> bool {
  match hex_code {
    Some(code) if !code.trim().is_empty() => HEX_CODE.is_match(code),
    _ => false,
  }
}

/// Incoming color as posted by clients. Field names are matched ignoring case
/// and both fields may be missing or `null`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColorPayload {
  pub name: Option<String>,
  pub hex_code: Option<String>,
}

impl ColorPayload {
  /// Missing fields become empty text, which the store then rejects.
  pub fn into_color(self) -> ColorItem {
    ColorItem {
      name: self.name.unwrap_or_default(),
      hex_code: self.hex_code.unwrap_or_default(),
    }
  }
}

struct ColorPayloadVisitor;

impl<'de> Visitor<'de> for ColorPayloadVisitor {
  type Value = ColorPayload;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "an object with name and hexCode")
  }

  // Keys are seen in input order, so a later spelling of the same field overrides an earlier one.
  fn visit_map<A>(self, mut map: A) -> Result<ColorPayload, A::Error>
  where
    A: MapAccess<'de>,
  {
    let mut payload = ColorPayload::default();
    while let Some(key) = map.next_key::<String>()? {
      if key.eq_ignore_ascii_case("name") {
        payload.name = map.next_value()?;
      } else if key.eq_ignore_ascii_case("hexCode") {
        payload.hex_code = map.next_value()?;
      } else {
        map.next_value::<IgnoredAny>()?;
      }
    }
    Ok(payload)
  }
}

impl<'de> Deserialize<'de> for ColorPayload {
  fn deserialize<D>(deserializer: D) -> Result<ColorPayload, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_map(ColorPayloadVisitor)
  }
}
