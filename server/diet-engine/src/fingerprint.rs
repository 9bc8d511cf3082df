//! Stable id for a set of sanitized plan inputs.

use crate::types::SanitizedInputs;

/// `plan-` + 16 hex chars of a blake3 hash over every input that affects the
/// plan numbers or the chart layout. The intake log is not part of it.
pub fn plan_id(inputs: &SanitizedInputs) -> String {
  let p = &inputs.profile;
  let g = &inputs.goal;

  let mut hasher = blake3::Hasher::new();
  hasher.update(p.gender.as_str().as_bytes());
  hasher.update(b"|");
  hasher.update(&p.age.to_le_bytes());
  hasher.update(b"|");
  hasher.update(&p.height_cm.to_le_bytes());
  hasher.update(b"|");
  hasher.update(&p.weight_kg.to_bits().to_le_bytes());
  hasher.update(b"|");
  hasher.update(inputs.activity.key().as_bytes());
  hasher.update(b"|");
  hasher.update(&g.diet_days.to_le_bytes());
  hasher.update(b"|");
  hasher.update(&g.goal_weight_kg.to_bits().to_le_bytes());
  if let Some(start) = g.start_date {
    hasher.update(b"|");
    hasher.update(start.format("%Y-%m-%d").to_string().as_bytes());
  }

  let hex = hasher.finalize().to_hex();
  format!("plan-{}", &hex[..16])
}
