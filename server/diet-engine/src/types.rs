//! Core types for the diet engine (JSON contracts + internal models).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the caller sends)
// ---------------------------------------------------------------------------

/// Raw personal details as typed into the form. Every field is optional and
/// every number is read as `f64` (including whole-number fields) so that
/// `1e3`, `400.0` or values past `i64` reach the validator for clamping.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundProfile {
  #[serde(default)]
  pub gender: Option<String>,
  #[serde(default)]
  pub age: Option<f64>,
  #[serde(default)]
  pub height_cm: Option<f64>,
  #[serde(default)]
  pub weight_kg: Option<f64>,
}

/// Activity tier, either by number (1-5) or by key/label.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ActivityInput {
  Tier(i64),
  Name(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundGoal {
  #[serde(default)]
  pub diet_days: Option<f64>,
  #[serde(default)]
  pub goal_weight_kg: Option<f64>,
  /// Calendar date of day 1 (`YYYY-MM-DD`).
  #[serde(default)]
  pub start_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundIntake {
  pub day: i64,
  pub calories: f64,
}

/// Full set of plan inputs. Unknown fields are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanRequest {
  #[serde(default)]
  pub profile: InboundProfile,
  #[serde(default)]
  pub activity: Option<ActivityInput>,
  #[serde(default)]
  pub goal: InboundGoal,
  /// Optional entries to pre-populate the intake log with.
  #[serde(default)]
  pub intake: Vec<InboundIntake>,
}

/// One command line on stdin.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
  Configure(PlanRequest),
  Log(InboundIntake),
  Snapshot,
}

// ---------------------------------------------------------------------------
// Choices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
}

impl Gender {
  /// Sex-specific constant of the Mifflin-St Jeor equation.
  pub fn bmr_offset(self) -> f64 {
    match self {
      Self::Male => 5.0,
      Self::Female => -161.0,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Male => "male",
      Self::Female => "female",
    }
  }
}

impl FromStr for Gender {
  type Err = EngineError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "male" | "m" | "man" => Ok(Self::Male),
      "female" | "f" | "woman" => Ok(Self::Female),
      other => Err(EngineError::parse(format!("unknown gender {:?}", other))),
    }
  }
}

/// Training frequency tiers, each with a fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
  #[default]
  Light,
  Moderate,
  Daily,
  Intense,
  PhysicalJob,
}

impl ActivityLevel {
  pub const ALL: [ActivityLevel; 5] = [
    Self::Light,
    Self::Moderate,
    Self::Daily,
    Self::Intense,
    Self::PhysicalJob,
  ];

  pub fn factor(self) -> f64 {
    match self {
      Self::Light => 1.375,
      Self::Moderate => 1.47,
      Self::Daily => 1.58,
      Self::Intense => 1.75,
      Self::PhysicalJob => 1.9,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::Light => "1–3x / week",
      Self::Moderate => "4–5x / week",
      Self::Daily => "Daily / intense",
      Self::Intense => "6–7x intense",
      Self::PhysicalJob => "Very intense / physical job",
    }
  }

  pub fn key(self) -> &'static str {
    match self {
      Self::Light => "light",
      Self::Moderate => "moderate",
      Self::Daily => "daily",
      Self::Intense => "intense",
      Self::PhysicalJob => "physical_job",
    }
  }

  /// 1-based tier number.
  pub fn from_tier(tier: i64) -> Option<Self> {
    usize::try_from(tier)
      .ok()
      .and_then(|t| t.checked_sub(1))
      .and_then(|i| Self::ALL.get(i).copied())
  }
}

impl FromStr for ActivityLevel {
  type Err = EngineError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = fold_label(s);
    if let Ok(tier) = wanted.parse::<i64>() {
      return Self::from_tier(tier)
        .ok_or_else(|| EngineError::parse(format!("activity tier {} not in 1..=5", tier)));
    }
    Self::ALL
      .into_iter()
      .find(|level| fold_label(level.key()) == wanted || fold_label(level.label()) == wanted)
      .ok_or_else(|| EngineError::parse(format!("unknown activity level {:?}", s.trim())))
  }
}

impl fmt::Display for ActivityLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Case-, whitespace- and dash-insensitive form of a label.
fn fold_label(s: &str) -> String {
  s.chars()
    .filter(|c| !c.is_whitespace())
    .map(|c| if c == '–' || c == '—' { '-' } else { c.to_ascii_lowercase() })
    .collect()
}

// ---------------------------------------------------------------------------
// Sanitized inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
  pub gender: Gender,
  pub age: u32,
  pub height_cm: u32,
  pub weight_kg: f64,
}

/// Invariant: `goal_weight_kg <= weight_kg` of the profile it was sanitized against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietGoal {
  pub diet_days: u32,
  pub goal_weight_kg: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_date: Option<NaiveDate>,
}

/// Everything a calculation pass needs, after clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedInputs {
  pub profile: UserProfile,
  pub activity: ActivityLevel,
  pub goal: DietGoal,
}

// ---------------------------------------------------------------------------
// Derived results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyResult {
  pub bmr: f64,
  pub tdee: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanResult {
  pub daily_deficit: f64,
  pub target_calories: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryCode {
  AggressiveDeficit,
  UnsafeTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryLevel {
  Warning,
  Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
  pub code: AdvisoryCode,
  pub level: AdvisoryLevel,
  pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyLogEntry {
  pub day_index: u32,
  pub calories_logged: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
  pub day: u32,
  pub calories_eaten: u32,
  pub target_calories: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

/// Whole-kcal figures for display, truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayMetrics {
  pub bmr: i64,
  pub tdee: i64,
  pub daily_deficit: i64,
  pub target_calories: i64,
}

impl DisplayMetrics {
  pub fn new(energy: &EnergyResult, plan: &PlanResult) -> Self {
    Self {
      bmr: whole_kcal(energy.bmr),
      tdee: whole_kcal(energy.tdee),
      daily_deficit: whole_kcal(plan.daily_deficit),
      target_calories: whole_kcal(plan.target_calories),
    }
  }
}

fn whole_kcal(v: f64) -> i64 {
  v.trunc() as i64
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivitySummary {
  pub level: ActivityLevel,
  pub label: &'static str,
  pub factor: f64,
}

impl From<ActivityLevel> for ActivitySummary {
  fn from(level: ActivityLevel) -> Self {
    Self {
      level,
      label: level.label(),
      factor: level.factor(),
    }
  }
}

/// Everything the presentation layer needs after one recompute.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSnapshot {
  pub plan_id: String,
  pub profile: UserProfile,
  pub activity: ActivitySummary,
  pub goal: DietGoal,
  pub energy: EnergyResult,
  pub plan: PlanResult,
  pub advisories: Vec<Advisory>,
  pub display: DisplayMetrics,
  pub chart: Vec<ChartPoint>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for rejected input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

impl From<&EngineError> for ErrorOutput {
  fn from(e: &EngineError) -> Self {
    match e {
      EngineError::Validation { field, reason } => Self::new(reason.clone()).with_field(field.clone()),
      _ => Self::new(e.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn activity_parses_key_label_and_tier() {
    assert_eq!("moderate".parse::<ActivityLevel>().unwrap(), ActivityLevel::Moderate);
    assert_eq!("1–3x / week".parse::<ActivityLevel>().unwrap(), ActivityLevel::Light);
    assert_eq!("1-3x/week".parse::<ActivityLevel>().unwrap(), ActivityLevel::Light);
    assert_eq!("Physical_Job".parse::<ActivityLevel>().unwrap(), ActivityLevel::PhysicalJob);
    assert_eq!("4".parse::<ActivityLevel>().unwrap(), ActivityLevel::Intense);
    assert!("6".parse::<ActivityLevel>().is_err());
    assert!("couch".parse::<ActivityLevel>().is_err());
  }

  #[test]
  fn activity_factors_are_increasing() {
    let factors: Vec<f64> = ActivityLevel::ALL.iter().map(|l| l.factor()).collect();
    assert_eq!(factors, vec![1.375, 1.47, 1.58, 1.75, 1.9]);
  }

  #[test]
  fn gender_parse_is_loose() {
    assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
    assert_eq!(" Female ".parse::<Gender>().unwrap(), Gender::Female);
    assert!("other".parse::<Gender>().is_err());
  }

  #[test]
  fn display_truncates_toward_zero() {
    let energy = EnergyResult { bmr: 1831.25, tdee: 2517.96875 };
    let plan = PlanResult { daily_deficit: 1000.9, target_calories: -12.7 };
    let display = DisplayMetrics::new(&energy, &plan);
    assert_eq!(display.bmr, 1831);
    assert_eq!(display.tdee, 2517);
    assert_eq!(display.daily_deficit, 1000);
    assert_eq!(display.target_calories, -12);
  }

  #[test]
  fn configure_command_is_tagged_by_op() {
    let cmd: Command = serde_json::from_str(
      r#"{"op":"configure","profile":{"age":30},"activity":2,"goal":{"diet_days":60}}"#,
    )
    .unwrap();
    match cmd {
      Command::Configure(req) => {
        assert_eq!(req.profile.age, Some(30.0));
        assert!(matches!(req.activity, Some(ActivityInput::Tier(2))));
        assert_eq!(req.goal.diet_days, Some(60.0));
      }
      other => panic!("unexpected command {:?}", other),
    }
  }
}
