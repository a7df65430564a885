//! Factory functions for request payloads used across API tests.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

pub fn create_todo_request(text: &str, parent_id: Option<Uuid>) -> Value {
    json!({
        "text": text,
        "is_daily": false,
        "parent_id": parent_id,
    })
}

pub fn create_daily_todo_request(text: &str) -> Value {
    json!({
        "text": text,
        "is_daily": true,
    })
}

pub fn create_habit_request(name: &str, target_count: i32) -> Value {
    json!({
        "name": name,
        "color": "#22c55e",
        "frequency": "daily",
        "target_count": target_count,
    })
}

pub fn create_countdown_request(title: &str, target_date: DateTime<Utc>) -> Value {
    json!({
        "title": title,
        "target_date": target_date,
        "color": "#3b82f6",
    })
}

pub fn create_task_request(text: &str, quadrant: &str) -> Value {
    json!({
        "text": text,
        "quadrant": quadrant,
    })
}

pub fn create_workout_request(name: &str, days_ago: i64, duration_min: i32) -> Value {
    json!({
        "name": name,
        "date": Utc::now() - Duration::days(days_ago),
        "duration_min": duration_min,
    })
}

pub fn add_exercise_request(name: &str, sets: i32, reps: i32, position: i32) -> Value {
    json!({
        "exercise_name": name,
        "sets": sets,
        "reps": reps,
        "position": position,
    })
}

pub fn create_run_request(days_ago: i64, distance_km: f64, duration_min: f64) -> Value {
    json!({
        "date": Utc::now() - Duration::days(days_ago),
        "distance_km": distance_km,
        "duration_min": duration_min,
    })
}
