//! Sanitize raw form input into clamped, domain-safe values.
//!
//! Numeric fields are clamped to the nearest bound and never rejected.
//! Only enumerated choices and dates can fail.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::{Bounds, Config};
use crate::error::EngineError;
use crate::types::*;

const DEFAULT_AGE: f64 = 21.0;
const DEFAULT_HEIGHT_CM: f64 = 181.0;
const DEFAULT_WEIGHT_KG: f64 = 80.0;
const DEFAULT_DIET_DAYS: f64 = 42.0;
/// Default goal is this many kg under the current weight.
const DEFAULT_GOAL_OFFSET_KG: f64 = 5.0;

/// Parse and clamp a full PlanRequest.
pub fn sanitize(raw: &PlanRequest, config: &Config) -> Result<SanitizedInputs, EngineError> {
  let profile = sanitize_profile(&raw.profile, config)?;
  let activity = sanitize_activity(raw.activity.as_ref())?;
  let goal = sanitize_goal(&raw.goal, profile.weight_kg, config)?;
  Ok(SanitizedInputs {
    profile,
    activity,
    goal,
  })
}

pub fn sanitize_profile(raw: &InboundProfile, config: &Config) -> Result<UserProfile, EngineError> {
  let gender = match &raw.gender {
    Some(g) => g
      .parse::<Gender>()
      .map_err(|e| EngineError::validation("profile.gender", &reason(e)))?,
    None => Gender::Male,
  };

  Ok(UserProfile {
    gender,
    age: clamp_int("profile.age", raw.age.unwrap_or(DEFAULT_AGE), config.age),
    height_cm: clamp_int(
      "profile.height_cm",
      raw.height_cm.unwrap_or(DEFAULT_HEIGHT_CM),
      config.height_cm,
    ),
    weight_kg: clamp_f64(
      "profile.weight_kg",
      raw.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG),
      config.weight_kg,
    ),
  })
}

pub fn sanitize_activity(raw: Option<&ActivityInput>) -> Result<ActivityLevel, EngineError> {
  let parsed = match raw {
    None => return Ok(ActivityLevel::default()),
    Some(ActivityInput::Tier(t)) => ActivityLevel::from_tier(*t)
      .ok_or_else(|| EngineError::parse(format!("activity tier {} not in 1..=5", t))),
    Some(ActivityInput::Name(name)) => name.parse::<ActivityLevel>(),
  };
  parsed.map_err(|e| EngineError::validation("activity", &reason(e)))
}

/// Clamp the goal against an already-sanitized current weight.
///
/// The goal never exceeds `weight_kg`, even if `goal_weight_floor_kg` is set above it.
pub fn sanitize_goal(raw: &InboundGoal, weight_kg: f64, config: &Config) -> Result<DietGoal, EngineError> {
  let diet_days = clamp_int(
    "goal.diet_days",
    raw.diet_days.unwrap_or(DEFAULT_DIET_DAYS),
    config.diet_days,
  );

  let floor = config.goal_weight_floor_kg.min(weight_kg);
  let requested = raw
    .goal_weight_kg
    .unwrap_or_else(|| (weight_kg - DEFAULT_GOAL_OFFSET_KG).max(config.goal_weight_floor_kg));
  let goal_weight_kg = clamp_f64("goal.goal_weight_kg", requested, Bounds::new(floor, weight_kg));

  let start_date = match &raw.start_date {
    Some(s) => Some(parse_start_date(s)?),
    None => None,
  };

  Ok(DietGoal {
    diet_days,
    goal_weight_kg,
    start_date,
  })
}

/// Logged calories are whole, non-negative kcal; anything below zero
/// (or not a number) becomes zero.
pub fn sanitize_calories(calories: f64) -> u32 {
  clamp_int("calories", calories, Bounds::new(0, i64::from(u32::MAX)))
}

/// Log days must name an existing day of the plan.
pub fn sanitize_day(day: i64, diet_days: u32) -> Result<u32, EngineError> {
  match u32::try_from(day) {
    Ok(d) if (1..=diet_days).contains(&d) => Ok(d),
    _ => Err(EngineError::validation(
      "day",
      &format!("must be within 1..={}, got {}", diet_days, day),
    )),
  }
}

fn reason(e: EngineError) -> String {
  match e {
    EngineError::Parse(msg) => msg,
    other => other.to_string(),
  }
}

fn parse_start_date(s: &str) -> Result<NaiveDate, EngineError> {
  NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
    .map_err(|e| EngineError::validation("goal.start_date", &format!("expected YYYY-MM-DD: {}", e)))
}

/// Clamp to `bounds`, then drop any fractional part. Non-finite input maps
/// to the lower bound.
fn clamp_int(field: &str, raw: f64, bounds: Bounds<i64>) -> u32 {
  let whole = clamp_f64(field, raw, Bounds::new(bounds.min as f64, bounds.max as f64)).trunc();
  u32::try_from(whole as i64).unwrap_or(0)
}

fn clamp_f64(field: &str, raw: f64, bounds: Bounds<f64>) -> f64 {
  if !raw.is_finite() {
    debug!(field, raw, clamped = bounds.min, "non-finite input");
    return bounds.min;
  }
  let clamped = raw.max(bounds.min).min(bounds.max);
  if clamped != raw {
    debug!(field, raw, clamped, "clamped input");
  }
  clamped
}
