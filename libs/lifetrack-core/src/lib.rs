//! Core lifetrack library shared by the backend application.
//!
//! Provides:
//! - Distinct-calendar-day streak computation (habits, workouts, runs)
//! - Run pace math and pace zone classification
//! - Countdown time-remaining decomposition
//! - Eisenhower focus recommendation heuristic
//! - Todo subtask depth rules and daily-reset view derivation
//! - Shared enums (Priority, Frequency, Quadrant, Feeling, etc.)
//!
//! Everything here is pure: functions that depend on the current time
//! take an explicit `now` argument so callers control the clock.

pub mod catalog;
pub mod countdown;
pub mod error;
pub mod matrix;
pub mod pace;
pub mod streak;
pub mod todo;
pub mod types;

pub use catalog::{suggested_exercises, SuggestedExercise};
pub use countdown::TimeRemaining;
pub use error::{DomainError, Result};
pub use matrix::{recommend_focus, Focus, FocusPriority};
pub use pace::{compute_pace, round2, PaceZone, PaceZoneDistribution};
pub use streak::{day_key, streaks, Streaks};
pub use todo::{child_level, derived_completion, MAX_TODO_LEVEL};
pub use types::{Feeling, Frequency, Priority, Quadrant, Theme, Units, WeekStart};
