//! Run endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Duration, Utc};
use lifetrack_core::{compute_pace, streak, PaceZoneDistribution, Streaks};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/runs
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Run>>> {
    let mut runs = state.db.list_runs().await?;
    if let Some(limit) = query.limit {
        runs.truncate(limit);
    }
    Ok(Json(runs))
}

/// GET /api/runs/recent
pub async fn recent(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<Run>>> {
    let mut runs = state.db.list_runs().await?;
    runs.truncate(query.limit.unwrap_or(5));
    Ok(Json(runs))
}

/// GET /api/runs/range
pub async fn range(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<Run>>> {
    let runs = state.db.runs_in_range(query.start, query.end).await?;
    Ok(Json(runs))
}

/// GET /api/runs/stats
pub async fn stats(State(state): State<AppState>) -> Result<Json<RunStats>> {
    let runs = state.db.list_runs().await?;
    Ok(Json(RunStats::compute(&runs, Utc::now())))
}

/// GET /api/runs/weekly-summary
pub async fn weekly_summary(State(state): State<AppState>) -> Result<Json<PeriodSummary>> {
    let now = Utc::now();
    let runs = state.db.runs_in_range(now - Duration::days(7), now).await?;
    Ok(Json(PeriodSummary::compute(&runs)))
}

/// GET /api/runs/monthly-summary
pub async fn monthly_summary(State(state): State<AppState>) -> Result<Json<MonthlySummary>> {
    let now = Utc::now();
    let runs = state
        .db
        .runs_in_range(now - Duration::days(30), now)
        .await?;
    Ok(Json(MonthlySummary::compute(&runs, now)))
}

/// GET /api/runs/personal-bests
pub async fn personal_bests(State(state): State<AppState>) -> Result<Json<PersonalBests>> {
    let runs = state.db.list_runs().await?;
    Ok(Json(PersonalBests::compute(&runs)))
}

/// GET /api/runs/streak
pub async fn run_streak(State(state): State<AppState>) -> Result<Json<Streaks>> {
    let runs = state.db.list_runs().await?;
    let streaks = streak::streaks(runs.iter().map(|r| r.date), Utc::now());
    Ok(Json(streaks))
}

/// POST /api/runs
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateRunRequest>,
) -> Result<Json<Run>> {
    let pace = compute_pace(request.distance_km, request.duration_min)?;

    let run = state
        .db
        .insert_run(
            request.date,
            request.distance_km,
            request.duration_min,
            pace,
            request.route.as_deref(),
            request.notes.as_deref(),
            request.feeling.map(|f| f.as_str()),
            request.weather.as_deref(),
        )
        .await?;
    Ok(Json(run))
}

/// PUT /api/runs/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRunRequest>,
) -> Result<Json<Run>> {
    let current = state
        .db
        .get_run(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("run {id}")))?;

    let date = request.date.unwrap_or(current.date);
    let distance_km = request.distance_km.unwrap_or(current.distance_km);
    let duration_min = request.duration_min.unwrap_or(current.duration_min);
    // Recompute pace only when either input changed.
    let pace = if request.distance_km.is_some() || request.duration_min.is_some() {
        compute_pace(distance_km, duration_min)?
    } else {
        current.pace
    };
    let route = request.route.or(current.route);
    let notes = request.notes.or(current.notes);
    let feeling = request
        .feeling
        .map(|f| f.as_str().to_string())
        .or(current.feeling);
    let weather = request.weather.or(current.weather);

    state
        .db
        .update_run(
            id,
            date,
            distance_km,
            duration_min,
            pace,
            route.as_deref(),
            notes.as_deref(),
            feeling.as_deref(),
            weather.as_deref(),
        )
        .await?;

    let updated = state
        .db
        .get_run(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("run {id}")))?;
    Ok(Json(updated))
}

/// DELETE /api/runs/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.db.delete_run(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("run {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// GET /api/runs/calendar
pub async fn calendar(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<std::collections::BTreeMap<String, RunCalendarDay>>> {
    let runs = state.db.runs_in_range(query.start, query.end).await?;
    Ok(Json(crate::models::run::calendar_by_day(runs)))
}

/// GET /api/runs/pace-zones
pub async fn pace_zones(State(state): State<AppState>) -> Result<Json<PaceZoneDistribution>> {
    let runs = state.db.list_runs().await?;
    Ok(Json(PaceZoneDistribution::from_paces(
        runs.iter().map(|r| r.pace),
    )))
}
