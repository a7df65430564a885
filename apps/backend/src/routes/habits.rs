//! Habit endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/habits
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListHabitsQuery>,
) -> Result<Json<Vec<Habit>>> {
    let habits = state
        .db
        .list_habits(query.include_inactive.unwrap_or(false))
        .await?;
    Ok(Json(habits))
}

/// GET /api/habits/:id/stats
pub async fn stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HabitWithStats>> {
    let habit = state
        .db
        .get_habit(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("habit {id}")))?;

    let completions = state.db.completions_for(id).await?;
    let stats = HabitStats::compute(&completions, Utc::now());

    Ok(Json(HabitWithStats { habit, stats }))
}

/// GET /api/habits/today-progress
pub async fn today_progress(State(state): State<AppState>) -> Result<Json<Vec<HabitProgress>>> {
    let now = Utc::now();
    let today_start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(now);

    let habits = state.db.list_habits(false).await?;
    let mut progress = Vec::with_capacity(habits.len());
    for habit in habits {
        let completed_today = state
            .db
            .count_completions_since(habit.id, today_start)
            .await?;
        let is_complete = completed_today >= habit.target_count as i64;
        progress.push(HabitProgress {
            habit,
            completed_today,
            is_complete,
        });
    }

    Ok(Json(progress))
}

/// POST /api/habits
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateHabitRequest>,
) -> Result<Json<Habit>> {
    let habit = state.db.insert_habit(&request).await?;
    Ok(Json(habit))
}

/// PUT /api/habits/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateHabitRequest>,
) -> Result<Json<Habit>> {
    let current = state
        .db
        .get_habit(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("habit {id}")))?;

    // Merge supplied fields into the stored row.
    let name = request.name.unwrap_or(current.name);
    let description = request.description.or(current.description);
    let color = request.color.unwrap_or(current.color);
    let icon = request.icon.or(current.icon);
    let frequency = request
        .frequency
        .map(|f| f.as_str().to_string())
        .unwrap_or(current.frequency);
    let target_count = request.target_count.unwrap_or(current.target_count);

    state
        .db
        .update_habit(
            id,
            &name,
            description.as_deref(),
            &color,
            icon.as_deref(),
            &frequency,
            target_count,
        )
        .await?;

    fetch(&state, id).await
}

/// POST /api/habits/:id/toggle-active
pub async fn toggle_active(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Habit>> {
    let habit = state
        .db
        .get_habit(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("habit {id}")))?;

    state.db.set_habit_active(id, !habit.is_active).await?;
    fetch(&state, id).await
}

/// DELETE /api/habits/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.db.delete_habit(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("habit {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// POST /api/habits/:id/complete
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CompleteHabitRequest>,
) -> Result<Json<HabitCompletion>> {
    state
        .db
        .get_habit(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("habit {id}")))?;

    let completion = state
        .db
        .insert_completion(id, Utc::now(), request.note.as_deref())
        .await?;
    Ok(Json(completion))
}

/// POST /api/habits/:id/undo
pub async fn undo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    state
        .db
        .get_habit(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("habit {id}")))?;

    let undone = state.db.undo_last_completion(id).await?;
    Ok(Json(serde_json::json!({ "undone": undone })))
}

/// GET /api/habits/:id/history
pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<std::collections::BTreeMap<String, usize>>> {
    state
        .db
        .get_habit(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("habit {id}")))?;

    let completions = state
        .db
        .completions_in_range(id, query.start, query.end)
        .await?;
    Ok(Json(history_by_day(&completions)))
}

/// GET /api/habits/summary
pub async fn summary(State(state): State<AppState>) -> Result<Json<HabitsSummary>> {
    let now = Utc::now();
    let today_start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(now);

    let habits = state.db.list_habits(false).await?;
    let mut counts = Vec::with_capacity(habits.len());
    for habit in &habits {
        let done = state
            .db
            .count_completions_since(habit.id, today_start)
            .await?;
        counts.push((habit.target_count, done));
    }

    Ok(Json(HabitsSummary::compute(&counts)))
}

async fn fetch(state: &AppState, id: Uuid) -> Result<Json<Habit>> {
    let habit = state
        .db
        .get_habit(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("habit {id}")))?;
    Ok(Json(habit))
}
