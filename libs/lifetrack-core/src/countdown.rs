//! Countdown time-remaining decomposition.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Time between now and a countdown target, broken into whole
/// days/hours/minutes/seconds. Never persisted; always derived at
/// read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRemaining {
    pub total_ms: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub is_past: bool,
}

impl TimeRemaining {
    pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        let total_ms = (target - now).num_milliseconds();
        let is_past = total_ms < 0;

        let total_seconds = total_ms.abs() / 1_000;
        let days = total_seconds / 86_400;
        let hours = (total_seconds % 86_400) / 3_600;
        let minutes = (total_seconds % 3_600) / 60;
        let seconds = total_seconds % 60;

        Self {
            total_ms,
            days,
            hours,
            minutes,
            seconds,
            is_past,
        }
    }
}
