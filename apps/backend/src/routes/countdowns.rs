//! Countdown endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/countdowns
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListCountdownsQuery>,
) -> Result<Json<Vec<Countdown>>> {
    let countdowns = state
        .db
        .list_countdowns(query.include_archived.unwrap_or(false))
        .await?;
    Ok(Json(countdowns))
}

/// GET /api/countdowns/active
pub async fn active(State(state): State<AppState>) -> Result<Json<Vec<Countdown>>> {
    let mut countdowns = state.db.list_countdowns(false).await?;
    countdowns.sort_by_key(|c| c.target_date);
    Ok(Json(countdowns))
}

/// GET /api/countdowns/:id/time-remaining
pub async fn time_remaining(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CountdownWithTime>> {
    let countdown = state
        .db
        .get_countdown(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("countdown {id}")))?;
    Ok(Json(countdown.with_time_remaining(Utc::now())))
}

/// GET /api/countdowns/with-time
pub async fn with_time(State(state): State<AppState>) -> Result<Json<Vec<CountdownWithTime>>> {
    let now = Utc::now();
    let mut countdowns = state.db.list_countdowns(false).await?;
    countdowns.sort_by_key(|c| c.target_date);

    Ok(Json(
        countdowns
            .into_iter()
            .map(|c| c.with_time_remaining(now))
            .collect(),
    ))
}

/// POST /api/countdowns
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateCountdownRequest>,
) -> Result<Json<Countdown>> {
    let countdown = state.db.insert_countdown(&request).await?;
    Ok(Json(countdown))
}

/// PUT /api/countdowns/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCountdownRequest>,
) -> Result<Json<Countdown>> {
    let current = state
        .db
        .get_countdown(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("countdown {id}")))?;

    let title = request.title.unwrap_or(current.title);
    let description = request.description.or(current.description);
    let target_date = request.target_date.unwrap_or(current.target_date);
    let color = request.color.unwrap_or(current.color);
    let icon = request.icon.or(current.icon);

    state
        .db
        .update_countdown(
            id,
            &title,
            description.as_deref(),
            target_date,
            &color,
            icon.as_deref(),
        )
        .await?;

    fetch(&state, id).await
}

/// POST /api/countdowns/:id/archive
pub async fn archive(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Countdown>> {
    set_archived(state, id, true).await
}

/// POST /api/countdowns/:id/unarchive
pub async fn unarchive(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Countdown>> {
    set_archived(state, id, false).await
}

/// DELETE /api/countdowns/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.db.delete_countdown(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("countdown {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// GET /api/countdowns/upcoming
pub async fn upcoming(State(state): State<AppState>) -> Result<Json<Vec<Countdown>>> {
    let countdowns = state.db.list_countdowns(false).await?;
    Ok(Json(upcoming_within_week(countdowns, Utc::now())))
}

/// GET /api/countdowns/summary
pub async fn summary(State(state): State<AppState>) -> Result<Json<CountdownsSummary>> {
    let countdowns = state.db.list_countdowns(false).await?;
    Ok(Json(CountdownsSummary::compute(&countdowns, Utc::now())))
}

async fn set_archived(state: AppState, id: Uuid, is_archived: bool) -> Result<Json<Countdown>> {
    state
        .db
        .get_countdown(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("countdown {id}")))?;

    state.db.set_countdown_archived(id, is_archived).await?;
    fetch(&state, id).await
}

async fn fetch(state: &AppState, id: Uuid) -> Result<Json<Countdown>> {
    let countdown = state
        .db
        .get_countdown(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("countdown {id}")))?;
    Ok(Json(countdown))
}
