//! Distinct-calendar-day streak computation.
//!
//! Habits, workouts and runs all measure streaks the same way: a day
//! counts when at least one qualifying event landed on it. The current
//! streak walks backward from today's calendar day; the longest streak
//! is the longest run of consecutive days anywhere in the history.
//! Days are normalized in UTC.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Current and longest consecutive-day streaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Streaks {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Compute streaks over any sequence of event timestamps.
///
/// Recomputing with the same events and `now` always yields the same
/// result.
pub fn streaks<I>(timestamps: I, now: DateTime<Utc>) -> Streaks
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let days = distinct_days(timestamps);
    Streaks {
        current_streak: current_streak(&days, now.date_naive()),
        longest_streak: longest_streak(&days),
    }
}

/// Distinct calendar days covered by the given timestamps.
pub fn distinct_days<I>(timestamps: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    timestamps.into_iter().map(|ts| ts.date_naive()).collect()
}

/// Consecutive days with activity ending at `today`, walking backward.
/// Zero when `today` itself has no activity.
pub fn current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(previous) => day = previous,
            None => break,
        }
    }
    streak
}

/// Longest run of consecutive days across the whole history.
pub fn longest_streak(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        run = match previous {
            Some(p) if p.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}

/// Calendar-day grouping key, `YYYY-MM-DD`.
pub fn day_key(ts: DateTime<Utc>) -> String {
    ts.date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn at(date: &str) -> DateTime<Utc> {
        format!("{date}T10:30:00Z").parse().unwrap()
    }

    #[test]
    fn empty_history_has_no_streaks() {
        let result = streaks(Vec::new(), at("2026-08-23"));
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.longest_streak, 0);
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        // D, D-1, D-2 with a gap at D-4.
        let now = at("2026-08-23");
        let events = vec![
            at("2026-08-23"),
            at("2026-08-22"),
            at("2026-08-21"),
            at("2026-08-19"),
        ];
        let result = streaks(events, now);
        assert_eq!(result.current_streak, 3);
        assert_eq!(result.longest_streak, 3);
    }

    #[test]
    fn gap_at_yesterday_breaks_current_streak() {
        let now = at("2026-08-23");
        let events = vec![at("2026-08-21"), at("2026-08-20")];
        let result = streaks(events, now);
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.longest_streak, 2);
    }

    #[test]
    fn multiple_events_on_one_day_count_once() {
        let now = at("2026-08-23");
        let events = vec![
            at("2026-08-23"),
            at("2026-08-23") + Duration::hours(5),
            at("2026-08-22"),
        ];
        let result = streaks(events, now);
        assert_eq!(result.current_streak, 2);
        assert_eq!(result.longest_streak, 2);
    }

    #[test]
    fn longest_streak_can_exceed_current() {
        let now = at("2026-08-23");
        let events = vec![
            at("2026-08-23"),
            at("2026-08-18"),
            at("2026-08-17"),
            at("2026-08-16"),
            at("2026-08-15"),
        ];
        let result = streaks(events, now);
        assert_eq!(result.current_streak, 1);
        assert_eq!(result.longest_streak, 4);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let now = at("2026-08-23");
        let events = vec![at("2026-08-23"), at("2026-08-22")];
        let first = streaks(events.clone(), now);
        let second = streaks(events, now);
        assert_eq!(first, second);
    }

    #[test]
    fn day_key_formats_utc_date() {
        assert_eq!(day_key(at("2026-08-23")), "2026-08-23");
    }
}
