//! Resting and total daily energy expenditure (Mifflin-St Jeor).

use crate::types::{EnergyResult, Gender, UserProfile};

/// BMR = 10·weight + 6.25·height − 5·age + s, with s = +5 (male) or −161 (female).
pub fn bmr(gender: Gender, weight_kg: f64, height_cm: u32, age: u32) -> f64 {
  10.0 * weight_kg + 6.25 * f64::from(height_cm) - 5.0 * f64::from(age) + gender.bmr_offset()
}

/// BMR and TDEE for a sanitized profile. No rounding.
pub fn compute_energy(profile: &UserProfile, activity_factor: f64) -> EnergyResult {
  let bmr = bmr(profile.gender, profile.weight_kg, profile.height_cm, profile.age);
  EnergyResult {
    bmr,
    tdee: bmr * activity_factor,
  }
}
