//! Integration tests for the diet engine.

use diet_engine::types::{AdvisoryCode, ErrorOutput};
use diet_engine::{Command, Config, PlanRequest, Session};

fn fixture_request() -> PlanRequest {
  let json = r#"{
    "profile": {"gender": "male", "age": 21, "height_cm": 181, "weight_kg": 80.0},
    "activity": "1–3x / week",
    "goal": {"diet_days": 42, "goal_weight_kg": 75.0, "start_date": "2025-01-06"}
  }"#;
  serde_json::from_str(json).unwrap()
}

fn codes(snapshot: &diet_engine::PlanSnapshot) -> Vec<AdvisoryCode> {
  snapshot.advisories.iter().map(|a| a.code).collect()
}

#[test]
fn reference_plan_matches_hand_calculation() {
  let mut session = Session::with_defaults();
  let snap = session.configure(&fixture_request()).unwrap();

  assert!((snap.energy.bmr - 1831.25).abs() < 1e-9);
  assert!((snap.energy.tdee - 2517.96875).abs() < 1e-9);
  assert!((snap.plan.daily_deficit - 916.666_666_7).abs() < 1e-6);
  assert!((snap.plan.target_calories - 1601.302_083).abs() < 1e-5);
  assert!(codes(&snap).is_empty());

  assert_eq!(snap.chart.len(), 42);
  assert!(snap.chart.iter().all(|p| p.target_calories == snap.plan.target_calories));
  assert!(snap.plan_id.starts_with("plan-"));
}

#[test]
fn crash_diet_fires_both_advisories() {
  let json = r#"{
    "profile": {"gender": "male", "age": 21, "height_cm": 181, "weight_kg": 80.0},
    "activity": "light",
    "goal": {"diet_days": 14, "goal_weight_kg": 60.0}
  }"#;
  let req: PlanRequest = serde_json::from_str(json).unwrap();
  let snap = Session::with_defaults().configure(&req).unwrap();

  assert!((snap.plan.daily_deficit - 11000.0).abs() < 1e-9);
  assert_eq!(
    codes(&snap),
    vec![AdvisoryCode::AggressiveDeficit, AdvisoryCode::UnsafeTarget]
  );
  // Numbers are still produced.
  assert!(snap.plan.target_calories < 0.0);
  assert_eq!(snap.chart.len(), 14);
}

#[test]
fn snapshot_json_shape() {
  let mut session = Session::with_defaults();
  let snap = session.configure(&fixture_request()).unwrap();
  let value = serde_json::to_value(&snap).unwrap();

  assert_eq!(value["profile"]["gender"], "male");
  assert_eq!(value["activity"]["level"], "light");
  assert_eq!(value["activity"]["factor"], 1.375);
  assert_eq!(value["goal"]["start_date"], "2025-01-06");
  assert_eq!(value["display"]["target_calories"], 1601);
  assert_eq!(value["chart"][0]["day"], 1);
  assert_eq!(value["chart"][0]["date"], "2025-01-06");
  assert_eq!(value["chart"][41]["date"], "2025-02-16");
  assert!(value["advisories"].as_array().unwrap().is_empty());
}

#[test]
fn command_stream_round() {
  let lines = [
    r#"{"op":"configure","goal":{"diet_days":7}}"#,
    r#"{"op":"log","day":1,"calories":2100}"#,
    r#"{"op":"log","day":3,"calories":-40}"#,
    r#"{"op":"snapshot"}"#,
  ];
  let mut session = Session::with_defaults();
  let mut last = None;
  for line in lines {
    let cmd: Command = serde_json::from_str(line).unwrap();
    last = Some(session.handle(&cmd).unwrap());
  }
  let snap = last.unwrap();
  let eaten: Vec<u32> = snap.chart.iter().map(|p| p.calories_eaten).collect();
  assert_eq!(eaten, vec![2100, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn rejected_lines_become_error_output() {
  let mut session = Session::with_defaults();
  session.configure(&PlanRequest::default()).unwrap();

  let cmd: Command = serde_json::from_str(r#"{"op":"log","day":99,"calories":100}"#).unwrap();
  let err = session.handle(&cmd).unwrap_err();
  let out = serde_json::to_value(ErrorOutput::from(&err)).unwrap();
  assert_eq!(out["error"], true);
  assert_eq!(out["field"], "day");

  let cmd: Command = serde_json::from_str(r#"{"op":"configure","activity":"couch"}"#).unwrap();
  let err = session.handle(&cmd).unwrap_err();
  let out = serde_json::to_value(ErrorOutput::from(&err)).unwrap();
  assert_eq!(out["field"], "activity");
}

#[test]
fn unknown_fields_are_ignored() {
  let json = r#"{
    "op": "configure",
    "profile": {"gender": "f", "age": 35, "height_cm": 165, "weight_kg": 70, "eye_color": "green"},
    "theme": "dark"
  }"#;
  let cmd: Command = serde_json::from_str(json).unwrap();
  let snap = Session::with_defaults().handle(&cmd).unwrap();
  // 10*70 + 6.25*165 - 5*35 - 161
  assert!((snap.energy.bmr - 1395.25).abs() < 1e-9);
}

#[test]
fn thresholds_follow_config() {
  let config = Config {
    aggressive_deficit_kcal: 500.0,
    ..Config::default()
  };
  let snap = Session::new(config).configure(&fixture_request()).unwrap();
  assert_eq!(codes(&snap), vec![AdvisoryCode::AggressiveDeficit]);
}

#[test]
fn deterministic_output_across_sessions() {
  let s1 = Session::with_defaults().configure(&fixture_request()).unwrap();
  let s2 = Session::with_defaults().configure(&fixture_request()).unwrap();
  assert_eq!(
    serde_json::to_string(&s1).unwrap(),
    serde_json::to_string(&s2).unwrap()
  );
}
