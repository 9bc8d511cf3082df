//! Chart series: logged intake against the constant target.

use chrono::{Days, NaiveDate};

use crate::types::{ChartPoint, DailyLogEntry};

/// Zip each logged day with the target. One point per entry, same order.
pub fn build_chart(entries: &[DailyLogEntry], target_calories: f64) -> Vec<ChartPoint> {
  entries
    .iter()
    .map(|e| ChartPoint {
      day: e.day_index,
      calories_eaten: e.calories_logged,
      target_calories,
      date: None,
    })
    .collect()
}

/// Label each point with its calendar date, day 1 being `start`.
pub fn label_dates(points: &mut [ChartPoint], start: NaiveDate) {
  for p in points {
    p.date = start.checked_add_days(Days::new(u64::from(p.day.saturating_sub(1))));
  }
}
