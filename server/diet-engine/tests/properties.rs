//! Property tests for the calculation pipeline.

use diet_engine::intake::IntakeLog;
use diet_engine::types::{AdvisoryCode, Gender, PlanResult, UserProfile};
use diet_engine::{advise, build_chart, compute_energy, compute_plan, Config};
use proptest::prelude::*;

fn profile(gender: Gender, age: u32, height_cm: u32, weight_kg: f64) -> UserProfile {
  UserProfile {
    gender,
    age,
    height_cm,
    weight_kg,
  }
}

proptest! {
  #[test]
  fn male_female_bmr_offset_is_166(age in 15u32..=80, height in 140u32..=220, weight in 40.0f64..=200.0) {
    let m = compute_energy(&profile(Gender::Male, age, height, weight), 1.0).bmr;
    let f = compute_energy(&profile(Gender::Female, age, height, weight), 1.0).bmr;
    prop_assert!((m - f - 166.0).abs() < 1e-9);
  }

  #[test]
  fn tdee_monotonic_in_factor(age in 15u32..=80, height in 140u32..=220, weight in 40.0f64..=200.0,
                              a in 1.0f64..2.5, b in 1.0f64..2.5) {
    prop_assume!(b - a > 1e-6);
    let p = profile(Gender::Male, age, height, weight);
    prop_assert!(compute_energy(&p, a).tdee < compute_energy(&p, b).tdee);
  }

  #[test]
  fn target_is_tdee_minus_deficit(weight in 40.0f64..=200.0, lose in 0.0f64..=160.0,
                                  days in 7u32..=365, tdee in 1000.0f64..5000.0) {
    let goal = (weight - lose).max(40.0);
    let plan = compute_plan(weight, goal, days, tdee, &Config::default());
    prop_assert_eq!(plan.target_calories, tdee - plan.daily_deficit);
  }

  #[test]
  fn equal_goal_means_zero_deficit(weight in 40.0f64..=200.0, days in 7u32..=365) {
    let plan = compute_plan(weight, weight, days, 2500.0, &Config::default());
    prop_assert_eq!(plan.daily_deficit, 0.0);
  }

  #[test]
  fn advisories_fire_iff_thresholds(deficit in 0.0f64..3000.0, target in -2000.0f64..4000.0) {
    let plan = PlanResult { daily_deficit: deficit, target_calories: target };
    let codes: Vec<AdvisoryCode> = advise(&plan, &Config::default()).into_iter().map(|a| a.code).collect();
    prop_assert_eq!(codes.contains(&AdvisoryCode::AggressiveDeficit), deficit > 1200.0);
    prop_assert_eq!(codes.contains(&AdvisoryCode::UnsafeTarget), target < 1200.0);
  }

  #[test]
  fn chart_spans_every_day(days in 7u32..=365, target in -5000.0f64..5000.0,
                           logged in proptest::collection::vec((1i64..=365, 0.0f64..5000.0), 0..20)) {
    let mut log = IntakeLog::new(days);
    for (day, calories) in logged {
      let _ = log.set_entry(day, calories);
    }
    let chart = build_chart(&log.get_all(), target);
    prop_assert_eq!(chart.len(), days as usize);
    prop_assert!(chart.iter().all(|p| p.target_calories == target));
    prop_assert!(chart.iter().enumerate().all(|(i, p)| p.day as usize == i + 1));
  }
}
