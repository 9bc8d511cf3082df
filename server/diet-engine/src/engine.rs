//! Session orchestration: holds the current inputs and intake log,
//! recomputes every derived value on each call.

use tracing::debug;

use crate::advisor;
use crate::chart;
use crate::config::Config;
use crate::deficit;
use crate::energy;
use crate::error::EngineError;
use crate::fingerprint;
use crate::intake::IntakeLog;
use crate::types::*;
use crate::validate;

/// One planning session. Nothing derived is cached.
pub struct Session {
  config: Config,
  inputs: Option<SanitizedInputs>,
  log: IntakeLog,
}

impl Session {
  pub fn new(config: Config) -> Self {
    Self {
      config,
      inputs: None,
      log: IntakeLog::default(),
    }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn inputs(&self) -> Option<&SanitizedInputs> {
    self.inputs.as_ref()
  }

  pub fn log(&self) -> &IntakeLog {
    &self.log
  }

  /// Dispatch one stdin command.
  pub fn handle(&mut self, command: &Command) -> Result<PlanSnapshot, EngineError> {
    match command {
      Command::Configure(req) => self.configure(req),
      Command::Log(entry) => self.log_intake(entry),
      Command::Snapshot => self.snapshot(),
    }
  }

  /// Replace the plan inputs and resize the log to the new diet length.
  ///
  /// Batch intake entries are applied to a copy of the log; if any is
  /// rejected the session is left unchanged.
  pub fn configure(&mut self, req: &PlanRequest) -> Result<PlanSnapshot, EngineError> {
    let inputs = validate::sanitize(req, &self.config)?;

    let mut log = self.log.clone();
    log.resize(inputs.goal.diet_days);
    for entry in &req.intake {
      log.set_entry(entry.day, entry.calories)?;
    }

    debug!(diet_days = inputs.goal.diet_days, batch = req.intake.len(), "configured plan");
    self.inputs = Some(inputs);
    self.log = log;
    self.snapshot()
  }

  pub fn log_intake(&mut self, entry: &InboundIntake) -> Result<PlanSnapshot, EngineError> {
    if self.inputs.is_none() {
      return Err(EngineError::validation("plan", "configure a plan before logging intake"));
    }
    self.log.set_entry(entry.day, entry.calories)?;
    self.snapshot()
  }

  pub fn snapshot(&self) -> Result<PlanSnapshot, EngineError> {
    let inputs = self
      .inputs
      .as_ref()
      .ok_or_else(|| EngineError::validation("plan", "no plan configured"))?;
    Ok(evaluate(inputs, &self.log, &self.config))
  }
}

/// Run the full pipeline for one set of inputs and a log.
pub fn evaluate(inputs: &SanitizedInputs, log: &IntakeLog, config: &Config) -> PlanSnapshot {
  let profile = &inputs.profile;
  let goal = &inputs.goal;

  let energy = energy::compute_energy(profile, inputs.activity.factor());
  let plan = deficit::compute_plan(
    profile.weight_kg,
    goal.goal_weight_kg,
    goal.diet_days,
    energy.tdee,
    config,
  );
  let advisories = advisor::advise(&plan, config);

  let mut chart = chart::build_chart(&log.get_all(), plan.target_calories);
  if let Some(start) = goal.start_date {
    chart::label_dates(&mut chart, start);
  }

  PlanSnapshot {
    plan_id: fingerprint::plan_id(inputs),
    profile: profile.clone(),
    activity: inputs.activity.into(),
    goal: goal.clone(),
    energy,
    plan,
    advisories,
    display: DisplayMetrics::new(&energy, &plan),
    chart,
  }
}
