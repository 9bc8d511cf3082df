//! Daily deficit and target intake for a weight-loss goal.

use crate::config::Config;
use crate::types::PlanResult;

/// Spread the energy content of the weight to lose evenly over the diet.
///
/// `target_calories` is not clamped and goes negative for unrealistic goals;
/// the advisor flags it instead. A zero-day diet yields no deficit.
pub fn compute_plan(
  weight_kg: f64,
  goal_weight_kg: f64,
  diet_days: u32,
  tdee: f64,
  config: &Config,
) -> PlanResult {
  let weight_to_lose = weight_kg - goal_weight_kg;
  let total_deficit = weight_to_lose * config.kcal_per_kg;
  let daily_deficit = if diet_days > 0 {
    total_deficit / f64::from(diet_days)
  } else {
    0.0
  };

  PlanResult {
    daily_deficit,
    target_calories: tdee - daily_deficit,
  }
}
