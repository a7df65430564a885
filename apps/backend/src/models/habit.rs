//! Habit entities, stats, and API types.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Months, Utc};
use lifetrack_core::{streak, Frequency};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Habit row. Frequency is stored as its wire literal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: Option<String>,
    pub frequency: String,
    pub target_count: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// One logged completion of a habit.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HabitCompletion {
    pub id: Uuid,
    pub habit_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: Option<String>,
    pub frequency: Frequency,
    pub target_count: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateHabitRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub frequency: Option<Frequency>,
    pub target_count: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompleteHabitRequest {
    pub note: Option<String>,
}

/// Completion statistics for one habit.
#[derive(Debug, Serialize, Deserialize)]
pub struct HabitStats {
    pub total: usize,
    pub today: usize,
    pub this_week: usize,
    pub this_month: usize,
    pub current_streak: u32,
}

impl HabitStats {
    /// Counts over the completion log: today (since UTC midnight),
    /// last 7 days, last calendar month, plus the current streak.
    pub fn compute(completions: &[HabitCompletion], now: DateTime<Utc>) -> Self {
        let today_start = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or(now);
        let week_start = now - Duration::days(7);
        let month_start = now.checked_sub_months(Months::new(1)).unwrap_or(now);

        let streaks = streak::streaks(completions.iter().map(|c| c.completed_at), now);

        Self {
            total: completions.len(),
            today: count_since(completions, today_start),
            this_week: count_since(completions, week_start),
            this_month: count_since(completions, month_start),
            current_streak: streaks.current_streak,
        }
    }
}

fn count_since(completions: &[HabitCompletion], since: DateTime<Utc>) -> usize {
    completions
        .iter()
        .filter(|c| c.completed_at >= since)
        .count()
}

#[derive(Debug, Serialize)]
pub struct HabitWithStats {
    pub habit: Habit,
    pub stats: HabitStats,
}

/// Today's progress for one active habit.
#[derive(Debug, Serialize)]
pub struct HabitProgress {
    #[serde(flatten)]
    pub habit: Habit,
    pub completed_today: i64,
    pub is_complete: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListHabitsQuery {
    pub include_inactive: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Completions per calendar day within a range.
pub fn history_by_day(completions: &[HabitCompletion]) -> BTreeMap<String, usize> {
    let mut grouped: BTreeMap<String, usize> = BTreeMap::new();
    for completion in completions {
        *grouped
            .entry(streak::day_key(completion.completed_at))
            .or_insert(0) += 1;
    }
    grouped
}

/// Aggregate progress across all active habits for today.
#[derive(Debug, Serialize, Deserialize)]
pub struct HabitsSummary {
    pub total_habits: usize,
    pub total_completed: i64,
    pub total_target: i64,
    pub percentage: i32,
}

impl HabitsSummary {
    /// `counts` pairs each active habit's target with its completion
    /// count for today; per-habit credit is capped at the target.
    pub fn compute(counts: &[(i32, i64)]) -> Self {
        let total_habits = counts.len();
        let total_completed: i64 = counts
            .iter()
            .map(|(target, done)| (*done).min(*target as i64))
            .sum();
        let total_target: i64 = counts.iter().map(|(target, _)| *target as i64).sum();
        let percentage = if total_target > 0 {
            ((total_completed as f64 / total_target as f64) * 100.0).round() as i32
        } else {
            0
        };
        Self {
            total_habits,
            total_completed,
            total_target,
            percentage,
        }
    }
}
