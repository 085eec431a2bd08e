use crate::color::{ColorItem, InvalidColor};

use rand::seq::IndexedRandom;
use slog::Logger;
use slog::{debug, info};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory, append-only list of colors shared by all request handlers.
pub struct ColorStore {
  colors: Mutex<Vec<ColorItem>>,
  logger: Logger,
}

fn default_colors() -> Vec<ColorItem> {
  vec![
    ColorItem::new("Red", "#FF0000"),
    ColorItem::new("Yellow", "#FFFF00"),
    ColorItem::new("Black", "#000000"),
  ]
}

impl ColorStore {
  pub fn new(logger: &Logger) -> ColorStore {
    ColorStore::with_colors(default_colors(), logger)
  }

  pub fn empty(logger: &Logger) -> ColorStore {
    ColorStore::with_colors(vec![], logger)
  }

  pub fn with_colors(colors: Vec<ColorItem>, logger: &Logger) -> ColorStore {
    ColorStore {
      colors: Mutex::new(colors),
      logger: logger.new(slog::o!("component" => "store")),
    }
  }

  // Nothing ever mutates an entry in place, so a panicked holder cannot leave the list half written.
  fn lock(&self) -> MutexGuard<'_, Vec<ColorItem>> {
    self.colors.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn all(&self) -> Vec<ColorItem> {
    self.lock().clone()
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  /// Appends `color` if its name is not blank and its hex code is valid,
  /// otherwise leaves the list untouched and says why.
  pub fn try_add(&self, color: ColorItem) -> Result<(), InvalidColor> {
    if let Err(reason) = color.validate() {
      info!(self.logger, "Rejected color"; "name" => &color.name, "hex_code" => &color.hex_code, "reason" => reason.to_string());
      return Err(reason);
    }
    debug!(self.logger, "Adding color"; "name" => &color.name, "hex_code" => &color.hex_code);
    self.lock().push(color);
    Ok(())
  }

  /// Returns whether the color was stored.
  pub fn add(&self, color: ColorItem) -> bool {
    self.try_add(color).is_ok()
  }

  /// Uniform pick over the current colors, `None` only when the store is empty.
  pub fn random(&self) -> Option<ColorItem> {
    let mut rng = rand::rng();
    self.lock().choose(&mut rng).cloned()
  }
}
