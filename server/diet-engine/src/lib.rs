//! Diet Planning Engine: deterministic calorie targets and intake tracking.
//!
//! Sanitizes a personal profile and diet goal, computes BMR (Mifflin-St Jeor),
//! TDEE, the daily deficit and the target intake, flags unsafe plans, and
//! zips a per-day intake log with the target for charting.
//!
//! No DB, no network; pure computation + in-memory session state.

pub mod advisor;
pub mod chart;
pub mod config;
pub mod deficit;
pub mod energy;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod intake;
pub mod stream;
pub mod types;
pub mod validate;

pub use advisor::advise;
pub use chart::build_chart;
pub use config::Config;
pub use deficit::compute_plan;
pub use energy::compute_energy;
pub use engine::{evaluate, Session};
pub use error::EngineError;
pub use intake::IntakeLog;
pub use types::{Command, PlanRequest, PlanSnapshot};
