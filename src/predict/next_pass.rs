use chrono::{DateTime, FixedOffset, Utc};

use super::types::VisiblePass;

const DAY_SECONDS: i64 = 86_400;

#[derive(Debug, Clone, PartialEq)]
pub struct PassSummary {
    pub start: DateTime<FixedOffset>,
    pub days_until: i64,
    pub duration_minutes: i64,
}

impl PassSummary {
    pub fn day_phrase(&self) -> String {
        day_phrase(self.days_until)
    }

    pub fn message(&self) -> String {
        format!(
            "The ISS will next be visible at your location {} ({}) at {} local time for {} minutes. Keep an eye out for it!",
            self.day_phrase(),
            self.start.format("%Y-%m-%d"),
            self.start.format("%H:%M:%S"),
            self.duration_minutes
        )
    }
}

/// Whole days between `now` and `start`, floored. Calendar boundaries are ignored.
pub fn days_until(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (start - now).num_seconds().div_euclid(DAY_SECONDS)
}

pub fn day_phrase(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        d => format!("in {} days", d),
    }
}

/// Rounds to the nearest minute, halves up.
pub fn duration_minutes(seconds: i64) -> i64 {
    (seconds as f64 / 60.0).round() as i64
}

/// Summarises the first pass in upstream order. The list is not re-sorted.
/// `None` when there is no pass or its start time is out of range.
pub fn next_pass(
    passes: &[VisiblePass],
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Option<PassSummary> {
    let pass = passes.first()?;
    let start = DateTime::from_timestamp(pass.start_utc, 0)?;
    Some(PassSummary {
        start: start.with_timezone(&offset),
        days_until: days_until(start, now),
        duration_minutes: duration_minutes(pass.duration),
    })
}

pub fn no_passes_message(window_days: u32) -> String {
    format!("No visible ISS passes in the next {} days.", window_days)
}

/// The output-panel line for a visual-pass lookup.
pub fn summarize(
    passes: &[VisiblePass],
    now: DateTime<Utc>,
    offset: FixedOffset,
    window_days: u32,
) -> String {
    next_pass(passes, now, offset)
        .map(|summary| summary.message())
        .unwrap_or_else(|| no_passes_message(window_days))
}
