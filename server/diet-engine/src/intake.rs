//! Per-day calorie log for the current session.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::EngineError;
use crate::types::DailyLogEntry;
use crate::validate;

/// Logged calories keyed by day index. Unset days read as 0.
///
/// Always spans exactly days `1..=diet_days`; resizing drops entries past the
/// new end and keeps the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeLog {
  diet_days: u32,
  entries: BTreeMap<u32, u32>,
}

impl IntakeLog {
  pub fn new(diet_days: u32) -> Self {
    Self {
      diet_days,
      entries: BTreeMap::new(),
    }
  }

  pub fn diet_days(&self) -> u32 {
    self.diet_days
  }

  pub fn resize(&mut self, diet_days: u32) {
    if diet_days == self.diet_days {
      return;
    }
    let dropped = self.entries.split_off(&diet_days.saturating_add(1)).len();
    debug!(from = self.diet_days, to = diet_days, dropped, "resized intake log");
    self.diet_days = diet_days;
  }

  /// Upsert calories for `day`. Negative values are clamped to 0; days
  /// outside the plan are rejected.
  pub fn set_entry(&mut self, day: i64, calories: f64) -> Result<(), EngineError> {
    let day = validate::sanitize_day(day, self.diet_days)?;
    self.entries.insert(day, validate::sanitize_calories(calories));
    Ok(())
  }

  pub fn get(&self, day: u32) -> u32 {
    self.entries.get(&day).copied().unwrap_or(0)
  }

  /// One entry per day of the plan, in day order.
  pub fn get_all(&self) -> Vec<DailyLogEntry> {
    (1..=self.diet_days)
      .map(|day_index| DailyLogEntry {
        day_index,
        calories_logged: self.get(day_index),
      })
      .collect()
  }
}
