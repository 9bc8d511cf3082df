//! Engine configuration with sane defaults.

use tracing::warn;

/// Inclusive numeric range used for clamping form inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
  pub min: T,
  pub max: T,
}

impl<T> Bounds<T> {
  pub const fn new(min: T, max: T) -> Self {
    Self { min, max }
  }
}

/// Tunable constants and input ranges for plan computation.
#[derive(Debug, Clone)]
pub struct Config {
  /// Energy stored per kg of body fat (kcal).
  pub kcal_per_kg: f64,
  /// Daily deficit above which the plan is flagged as aggressive.
  pub aggressive_deficit_kcal: f64,
  /// Target intake below which the plan is flagged as unsafe.
  pub min_safe_target_kcal: f64,
  pub age: Bounds<i64>,
  pub height_cm: Bounds<i64>,
  pub weight_kg: Bounds<f64>,
  /// Lower bound for goal weight; the upper bound is always the current weight.
  pub goal_weight_floor_kg: f64,
  pub diet_days: Bounds<i64>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      kcal_per_kg: 7700.0,
      aggressive_deficit_kcal: 1200.0,
      min_safe_target_kcal: 1200.0,
      age: Bounds::new(15, 80),
      height_cm: Bounds::new(140, 220),
      weight_kg: Bounds::new(40.0, 200.0),
      goal_weight_floor_kg: 40.0,
      diet_days: Bounds::new(7, 365),
    }
  }
}

impl Config {
  /// Defaults overlaid with `DIET_ENGINE_*` environment variables.
  pub fn from_env() -> Self {
    Self::default().overlay(|key| std::env::var(key).ok())
  }

  /// Apply overrides from `lookup`. Values that are not positive, finite
  /// numbers are ignored.
  pub fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
    if let Some(v) = positive(&lookup, "DIET_ENGINE_KCAL_PER_KG") {
      self.kcal_per_kg = v;
    }
    if let Some(v) = positive(&lookup, "DIET_ENGINE_AGGRESSIVE_DEFICIT") {
      self.aggressive_deficit_kcal = v;
    }
    if let Some(v) = positive(&lookup, "DIET_ENGINE_MIN_SAFE_TARGET") {
      self.min_safe_target_kcal = v;
    }
    self
  }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<f64> {
  let raw = lookup(key)?;
  match raw.trim().parse::<f64>() {
    Ok(v) if v.is_finite() && v > 0.0 => Some(v),
    _ => {
      warn!(key, value = %raw, "ignoring config override, expected a positive number");
      None
    }
  }
}
