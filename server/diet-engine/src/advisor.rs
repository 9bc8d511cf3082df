//! Advisory flags for plans that are too aggressive or too low.
//!
//! Advisories never block a plan; they are returned next to the numbers.

use tracing::debug;

use crate::config::Config;
use crate::types::{Advisory, AdvisoryCode, AdvisoryLevel, PlanResult};

impl AdvisoryCode {
  pub fn level(self) -> AdvisoryLevel {
    match self {
      Self::AggressiveDeficit => AdvisoryLevel::Warning,
      Self::UnsafeTarget => AdvisoryLevel::Error,
    }
  }

  pub fn message(self) -> &'static str {
    match self {
      Self::AggressiveDeficit => {
        "This deficit is very aggressive. Consider increasing your diet duration."
      }
      Self::UnsafeTarget => "Target calories are very low. This may not be sustainable or safe.",
    }
  }
}

impl From<AdvisoryCode> for Advisory {
  fn from(code: AdvisoryCode) -> Self {
    Self {
      code,
      level: code.level(),
      message: code.message().to_string(),
    }
  }
}

/// Zero, one or both advisories, in a fixed order. The two rules are independent.
pub fn advise(plan: &PlanResult, config: &Config) -> Vec<Advisory> {
  let mut out = Vec::new();
  if plan.daily_deficit > config.aggressive_deficit_kcal {
    out.push(AdvisoryCode::AggressiveDeficit.into());
  }
  if plan.target_calories < config.min_safe_target_kcal {
    out.push(AdvisoryCode::UnsafeTarget.into());
  }
  if !out.is_empty() {
    debug!(
      daily_deficit = plan.daily_deficit,
      target_calories = plan.target_calories,
      count = out.len(),
      "plan advisories"
    );
  }
  out
}
