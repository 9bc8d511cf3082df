//! Binary entrypoint: read JSON command lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a Command (`configure`, `log` or `snapshot`). Every
//! command produces exactly one output line:
//! - A PlanSnapshot (after the command was applied)
//! - An ErrorOutput (when the line was rejected; the session is unchanged)
//!
//! Diagnostics go to stderr via tracing; set RUST_LOG to see them.

use diet_engine::{stream, Config, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let mut session = Session::new(Config::from_env());
  info!("diet-engine ready");

  let stdin = io::stdin();
  let stdout = io::stdout();
  if let Err(e) = stream::run(&mut session, stdin.lock(), io::BufWriter::new(stdout.lock())) {
    error!(error = %e, "stream failed");
    std::process::exit(1);
  }
}
