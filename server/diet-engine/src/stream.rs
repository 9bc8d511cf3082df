//! JSON lines driver: one Command per input line, one output line per command.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::error;

use crate::engine::Session;
use crate::error::EngineError;
use crate::types::{Command, ErrorOutput};

/// Feed every non-blank line of `reader` to `session`, writing a
/// PlanSnapshot or an ErrorOutput per line to `writer`.
///
/// Rejected lines do not stop the stream. Only I/O failures do.
pub fn run<R: BufRead, W: Write>(session: &mut Session, reader: R, mut writer: W) -> io::Result<()> {
  for line in reader.lines() {
    let line = line?;

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let result = serde_json::from_str::<Command>(trimmed)
      .map_err(EngineError::from)
      .and_then(|command| session.handle(&command));

    match result {
      Ok(snapshot) => emit(&mut writer, &snapshot)?,
      Err(e) => emit(&mut writer, &ErrorOutput::from(&e))?,
    }
  }
  writer.flush()
}

fn emit<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
  if let Err(e) = serde_json::to_writer(&mut *out, value) {
    error!(error = %e, "failed to serialize output");
    return Err(io::Error::new(io::ErrorKind::Other, e));
  }
  writeln!(out)?;
  // One line per command; the caller is waiting on it.
  out.flush()
}
