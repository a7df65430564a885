//! Workout and exercise endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use lifetrack_core::{streak, suggested_exercises, Streaks, SuggestedExercise};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/workouts
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Workout>>> {
    let mut workouts = state.db.list_workouts().await?;
    if let Some(limit) = query.limit {
        workouts.truncate(limit);
    }
    Ok(Json(workouts))
}

/// GET /api/workouts/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkoutWithExercises>> {
    let workout = state
        .db
        .get_workout(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("workout {id}")))?;
    let exercises = state.db.exercises_for(id).await?;

    Ok(Json(WorkoutWithExercises { workout, exercises }))
}

/// GET /api/workouts/recent
pub async fn recent(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<WorkoutWithExercises>>> {
    let mut workouts = state.db.list_workouts().await?;
    workouts.truncate(query.limit.unwrap_or(5));

    let mut detailed = Vec::with_capacity(workouts.len());
    for workout in workouts {
        let exercises = state.db.exercises_for(workout.id).await?;
        detailed.push(WorkoutWithExercises { workout, exercises });
    }
    Ok(Json(detailed))
}

/// POST /api/workouts
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateWorkoutRequest>,
) -> Result<Json<Workout>> {
    let workout = state.db.insert_workout(&request).await?;
    Ok(Json(workout))
}

/// POST /api/workouts/:id/exercises
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddExerciseRequest>,
) -> Result<Json<Exercise>> {
    state
        .db
        .get_workout(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("workout {id}")))?;

    let exercise = state.db.insert_exercise(id, &request).await?;
    Ok(Json(exercise))
}

/// PUT /api/workouts/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateWorkoutRequest>,
) -> Result<Json<Workout>> {
    let current = state
        .db
        .get_workout(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("workout {id}")))?;

    let name = request.name.unwrap_or(current.name);
    let date = request.date.unwrap_or(current.date);
    let duration_min = request.duration_min.unwrap_or(current.duration_min);
    let notes = request.notes.or(current.notes);

    state
        .db
        .update_workout(id, &name, date, duration_min, notes.as_deref())
        .await?;

    let updated = state
        .db
        .get_workout(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("workout {id}")))?;
    Ok(Json(updated))
}

/// PUT /api/workouts/exercises/:id
pub async fn update_exercise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateExerciseRequest>,
) -> Result<Json<Exercise>> {
    let current = state
        .db
        .get_exercise(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("exercise {id}")))?;

    let exercise_name = request.exercise_name.unwrap_or(current.exercise_name);
    let sets = request.sets.unwrap_or(current.sets);
    let reps = request.reps.unwrap_or(current.reps);
    let rest_seconds = request.rest_seconds.or(current.rest_seconds);
    let notes = request.notes.or(current.notes);

    state
        .db
        .update_exercise(id, &exercise_name, sets, reps, rest_seconds, notes.as_deref())
        .await?;

    let updated = state
        .db
        .get_exercise(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("exercise {id}")))?;
    Ok(Json(updated))
}

/// DELETE /api/workouts/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.db.delete_workout(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("workout {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// DELETE /api/workouts/exercises/:id
pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.db.delete_exercise(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("exercise {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// GET /api/workouts/stats
pub async fn stats(State(state): State<AppState>) -> Result<Json<WorkoutStats>> {
    let workouts = state.db.list_workouts().await?;
    Ok(Json(WorkoutStats::compute(&workouts, Utc::now())))
}

/// GET /api/workouts/exercise-stats
pub async fn exercise_stats(
    State(state): State<AppState>,
    Query(query): Query<ExerciseStatsQuery>,
) -> Result<Json<ExerciseStats>> {
    let exercises = state.db.all_exercises().await?;
    Ok(Json(ExerciseStats::compute(&query.name, &exercises)))
}

/// GET /api/workouts/calendar
pub async fn calendar(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<std::collections::BTreeMap<String, Vec<Workout>>>> {
    let workouts = state.db.workouts_in_range(query.start, query.end).await?;
    Ok(Json(crate::models::workout::calendar_by_day(workouts)))
}

/// GET /api/workouts/streak
pub async fn workout_streak(State(state): State<AppState>) -> Result<Json<Streaks>> {
    let workouts = state.db.list_workouts().await?;
    let streaks = streak::streaks(workouts.iter().map(|w| w.date), Utc::now());
    Ok(Json(streaks))
}

/// GET /api/workouts/suggested-exercises
pub async fn suggested() -> Json<&'static [SuggestedExercise]> {
    Json(suggested_exercises())
}
