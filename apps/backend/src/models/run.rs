//! Run entity, statistics, and API types.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use lifetrack_core::{round2, streak, Feeling};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Run row. Pace is derived at write time (min/km, two decimals) and
/// recomputed whenever distance or duration changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Run {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub distance_km: f64,
    pub duration_min: f64,
    pub pace: f64,
    pub route: Option<String>,
    pub notes: Option<String>,
    pub feeling: Option<String>,
    pub weather: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRunRequest {
    pub date: DateTime<Utc>,
    pub distance_km: f64,
    pub duration_min: f64,
    pub route: Option<String>,
    pub notes: Option<String>,
    pub feeling: Option<Feeling>,
    pub weather: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateRunRequest {
    pub date: Option<DateTime<Utc>>,
    pub distance_km: Option<f64>,
    pub duration_min: Option<f64>,
    pub route: Option<String>,
    pub notes: Option<String>,
    pub feeling: Option<Feeling>,
    pub weather: Option<String>,
}

/// Aggregate running statistics. All distance and pace figures carry
/// two decimals; an empty history returns all zeros.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunStats {
    pub total_runs: usize,
    pub total_distance: f64,
    pub total_duration: i64,
    pub average_distance: f64,
    pub average_pace: f64,
    pub fastest_pace: f64,
    pub longest_run: f64,
    pub this_week: usize,
    pub this_month: usize,
}

impl RunStats {
    pub fn compute(runs: &[Run], now: DateTime<Utc>) -> Self {
        if runs.is_empty() {
            return Self {
                total_runs: 0,
                total_distance: 0.0,
                total_duration: 0,
                average_distance: 0.0,
                average_pace: 0.0,
                fastest_pace: 0.0,
                longest_run: 0.0,
                this_week: 0,
                this_month: 0,
            };
        }

        let week_ago = now - Duration::days(7);
        let month_ago = now - Duration::days(30);

        let total_distance: f64 = runs.iter().map(|r| r.distance_km).sum();
        let total_duration: f64 = runs.iter().map(|r| r.duration_min).sum();
        let average_pace = runs.iter().map(|r| r.pace).sum::<f64>() / runs.len() as f64;
        let fastest_pace = runs.iter().map(|r| r.pace).fold(f64::INFINITY, f64::min);
        let longest_run = runs
            .iter()
            .map(|r| r.distance_km)
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            total_runs: runs.len(),
            total_distance: round2(total_distance),
            total_duration: total_duration.round() as i64,
            average_distance: round2(total_distance / runs.len() as f64),
            average_pace: round2(average_pace),
            fastest_pace: round2(fastest_pace),
            longest_run: round2(longest_run),
            this_week: runs.iter().filter(|r| r.date >= week_ago).count(),
            this_month: runs.iter().filter(|r| r.date >= month_ago).count(),
        }
    }
}

/// Totals for a fixed trailing window (week or month).
#[derive(Debug, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub runs: usize,
    pub total_distance: f64,
    pub total_duration: i64,
    pub average_pace: f64,
}

impl PeriodSummary {
    pub fn compute(runs: &[Run]) -> Self {
        let total_distance: f64 = runs.iter().map(|r| r.distance_km).sum();
        let total_duration: f64 = runs.iter().map(|r| r.duration_min).sum();
        let average_pace = if runs.is_empty() {
            0.0
        } else {
            runs.iter().map(|r| r.pace).sum::<f64>() / runs.len() as f64
        };
        Self {
            runs: runs.len(),
            total_distance: round2(total_distance),
            total_duration: total_duration.round() as i64,
            average_pace: round2(average_pace),
        }
    }
}

/// Per-week totals inside the monthly summary, keyed by whole weeks
/// elapsed between the run and now.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct WeekBucket {
    pub distance: f64,
    pub duration: f64,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct MonthlySummary {
    #[serde(flatten)]
    pub summary: PeriodSummary,
    pub weekly_breakdown: BTreeMap<i64, WeekBucket>,
}

impl MonthlySummary {
    pub fn compute(runs: &[Run], now: DateTime<Utc>) -> Self {
        let mut weekly_breakdown: BTreeMap<i64, WeekBucket> = BTreeMap::new();
        for run in runs {
            let weeks_ago = (now - run.date).num_milliseconds() / (7 * 86_400_000);
            let bucket = weekly_breakdown.entry(weeks_ago).or_default();
            bucket.distance += run.distance_km;
            bucket.duration += run.duration_min;
            bucket.count += 1;
        }
        Self {
            summary: PeriodSummary::compute(runs),
            weekly_breakdown,
        }
    }
}

/// Best single runs: each the full record, first encountered wins
/// ties (left-fold comparison).
#[derive(Debug, Serialize)]
pub struct PersonalBests {
    pub longest_distance: Option<Run>,
    pub fastest_pace: Option<Run>,
    pub longest_duration: Option<Run>,
}

impl PersonalBests {
    pub fn compute(runs: &[Run]) -> Self {
        let best = |better: fn(&Run, &Run) -> bool| {
            runs.iter()
                .fold(None::<&Run>, |best, current| match best {
                    Some(b) if better(current, b) => Some(current),
                    None => Some(current),
                    other => other,
                })
                .cloned()
        };
        Self {
            longest_distance: best(|a, b| a.distance_km > b.distance_km),
            fastest_pace: best(|a, b| a.pace < b.pace),
            longest_duration: best(|a, b| a.duration_min > b.duration_min),
        }
    }
}

/// Per-day totals for the calendar view.
#[derive(Debug, Serialize)]
pub struct RunCalendarDay {
    pub runs: Vec<Run>,
    pub total_distance: f64,
    pub total_duration: f64,
}

pub fn calendar_by_day(runs: Vec<Run>) -> BTreeMap<String, RunCalendarDay> {
    let mut grouped: BTreeMap<String, RunCalendarDay> = BTreeMap::new();
    for run in runs {
        let day = grouped
            .entry(streak::day_key(run.date))
            .or_insert_with(|| RunCalendarDay {
                runs: Vec::new(),
                total_distance: 0.0,
                total_duration: 0.0,
            });
        day.total_distance += run.distance_km;
        day.total_duration += run.duration_min;
        day.runs.push(run);
    }
    grouped
}
