//! Workout and exercise entities, stats, and API types.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use lifetrack_core::streak;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub date: DateTime<Utc>,
    pub duration_min: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Exercise within a workout. `position` is supplied by the caller;
/// duplicates and gaps are the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Exercise {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: i32,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
    pub position: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateWorkoutRequest {
    pub name: String,
    pub date: DateTime<Utc>,
    pub duration_min: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateWorkoutRequest {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub duration_min: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddExerciseRequest {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: i32,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
    pub position: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateExerciseRequest {
    pub exercise_name: Option<String>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutWithExercises {
    #[serde(flatten)]
    pub workout: Workout,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DateRangeQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseStatsQuery {
    pub name: String,
}

/// Aggregate workout statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutStats {
    pub total_workouts: usize,
    pub total_duration: i64,
    pub average_duration: i64,
    pub this_week: usize,
    pub this_month: usize,
}

impl WorkoutStats {
    pub fn compute(workouts: &[Workout], now: DateTime<Utc>) -> Self {
        if workouts.is_empty() {
            return Self {
                total_workouts: 0,
                total_duration: 0,
                average_duration: 0,
                this_week: 0,
                this_month: 0,
            };
        }

        let week_ago = now - Duration::days(7);
        let month_ago = now - Duration::days(30);
        let total_duration: i64 = workouts.iter().map(|w| w.duration_min as i64).sum();

        Self {
            total_workouts: workouts.len(),
            total_duration,
            average_duration: ((total_duration as f64) / (workouts.len() as f64)).round() as i64,
            this_week: workouts.iter().filter(|w| w.date >= week_ago).count(),
            this_month: workouts.iter().filter(|w| w.date >= month_ago).count(),
        }
    }
}

/// Statistics for one exercise name across all workouts.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseStats {
    pub total_sessions: usize,
    pub total_sets: i64,
    pub total_reps: i64,
    pub max_reps: i32,
    pub average_reps: i64,
    pub personal_best: Option<Exercise>,
}

impl ExerciseStats {
    /// Matches `name` case-insensitively. The personal best is the
    /// record with the highest reps; the first encountered wins ties.
    pub fn compute(name: &str, exercises: &[Exercise]) -> Self {
        let wanted = name.to_lowercase();
        let matched: Vec<&Exercise> = exercises
            .iter()
            .filter(|e| e.exercise_name.to_lowercase() == wanted)
            .collect();

        if matched.is_empty() {
            return Self {
                total_sessions: 0,
                total_sets: 0,
                total_reps: 0,
                max_reps: 0,
                average_reps: 0,
                personal_best: None,
            };
        }

        let total_sets: i64 = matched.iter().map(|e| e.sets as i64).sum();
        let total_reps: i64 = matched.iter().map(|e| (e.sets as i64) * (e.reps as i64)).sum();
        let max_reps = matched.iter().map(|e| e.reps).max().unwrap_or(0);
        let personal_best = matched
            .iter()
            .copied()
            .fold(None::<&Exercise>, |best, current| match best {
                Some(b) if current.reps > b.reps => Some(current),
                None => Some(current),
                other => other,
            })
            .cloned();

        Self {
            total_sessions: matched.len(),
            total_sets,
            total_reps,
            max_reps,
            average_reps: ((total_reps as f64) / (matched.len() as f64)).round() as i64,
            personal_best,
        }
    }
}

/// Workouts grouped per calendar day.
pub fn calendar_by_day(workouts: Vec<Workout>) -> BTreeMap<String, Vec<Workout>> {
    let mut grouped: BTreeMap<String, Vec<Workout>> = BTreeMap::new();
    for workout in workouts {
        grouped
            .entry(streak::day_key(workout.date))
            .or_default()
            .push(workout);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        "2026-08-23T18:00:00Z".parse().unwrap()
    }

    fn workout(date: DateTime<Utc>, duration_min: i32) -> Workout {
        Workout {
            id: Uuid::new_v4(),
            name: "push day".to_string(),
            date,
            duration_min,
            notes: None,
            created_at: date,
        }
    }

    fn exercise(name: &str, sets: i32, reps: i32) -> Exercise {
        Exercise {
            id: Uuid::new_v4(),
            workout_id: Uuid::new_v4(),
            exercise_name: name.to_string(),
            sets,
            reps,
            rest_seconds: Some(60),
            notes: None,
            position: 0,
        }
    }

    #[test]
    fn workout_stats_average_and_windows() {
        let workouts = vec![
            workout(now() - Duration::days(1), 30),
            workout(now() - Duration::days(10), 45),
            workout(now() - Duration::days(40), 60),
        ];
        let stats = WorkoutStats::compute(&workouts, now());
        assert_eq!(stats.total_workouts, 3);
        assert_eq!(stats.total_duration, 135);
        assert_eq!(stats.average_duration, 45);
        assert_eq!(stats.this_week, 1);
        assert_eq!(stats.this_month, 2);
    }

    #[test]
    fn empty_workout_stats_are_zero() {
        let stats = WorkoutStats::compute(&[], now());
        assert_eq!(stats.total_workouts, 0);
        assert_eq!(stats.average_duration, 0);
    }

    #[test]
    fn exercise_stats_match_case_insensitively() {
        let exercises = vec![
            exercise("Push-ups", 3, 15),
            exercise("push-ups", 4, 20),
            exercise("Squats", 5, 10),
        ];
        let stats = ExerciseStats::compute("PUSH-UPS", &exercises);
        assert_eq!(stats.total_sessions, 2);
        assert_eq!(stats.total_sets, 7);
        // 3*15 + 4*20 = 125
        assert_eq!(stats.total_reps, 125);
        assert_eq!(stats.max_reps, 20);
        assert_eq!(stats.average_reps, 63);
    }

    #[test]
    fn personal_best_first_encountered_wins_ties() {
        let first = exercise("Dips", 3, 12);
        let tied = exercise("Dips", 2, 12);
        let stats = ExerciseStats::compute("dips", &[first.clone(), tied]);
        assert_eq!(stats.personal_best.unwrap().id, first.id);
    }

    #[test]
    fn unknown_exercise_yields_empty_stats() {
        let stats = ExerciseStats::compute("Muscle-ups", &[exercise("Dips", 3, 12)]);
        assert_eq!(stats.total_sessions, 0);
        assert!(stats.personal_best.is_none());
    }

    #[test]
    fn calendar_groups_by_day() {
        let grouped = calendar_by_day(vec![
            workout(now(), 30),
            workout(now() - Duration::hours(2), 20),
            workout(now() - Duration::days(1), 40),
        ]);
        assert_eq!(grouped.get("2026-08-23").map(Vec::len), Some(2));
        assert_eq!(grouped.get("2026-08-22").map(Vec::len), Some(1));
    }
}
