//! Eisenhower matrix endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use lifetrack_core::Quadrant;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/eisenhower
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<IncludeCompletedQuery>,
) -> Result<Json<Vec<EisenhowerTask>>> {
    let include_completed = query.include_completed.unwrap_or(false);
    let tasks = state
        .db
        .list_matrix_tasks()
        .await?
        .into_iter()
        .filter(|t| include_completed || !t.is_completed)
        .collect();

    Ok(Json(tasks))
}

/// GET /api/eisenhower/quadrant/:quadrant
pub async fn by_quadrant(
    State(state): State<AppState>,
    Path(quadrant): Path<Quadrant>,
    Query(query): Query<IncludeCompletedQuery>,
) -> Result<Json<Vec<EisenhowerTask>>> {
    let include_completed = query.include_completed.unwrap_or(false);
    let tasks = state
        .db
        .list_matrix_tasks()
        .await?
        .into_iter()
        .filter(|t| t.in_quadrant(quadrant))
        .filter(|t| include_completed || !t.is_completed)
        .collect();

    Ok(Json(tasks))
}

/// GET /api/eisenhower/matrix
pub async fn matrix(
    State(state): State<AppState>,
    Query(query): Query<IncludeCompletedQuery>,
) -> Result<Json<Matrix>> {
    let include_completed = query.include_completed.unwrap_or(false);
    let tasks: Vec<EisenhowerTask> = state
        .db
        .list_matrix_tasks()
        .await?
        .into_iter()
        .filter(|t| include_completed || !t.is_completed)
        .collect();

    Ok(Json(Matrix::bucket(tasks)))
}

/// POST /api/eisenhower
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<EisenhowerTask>> {
    let task = state.db.insert_matrix_task(&request).await?;
    Ok(Json(task))
}

/// PUT /api/eisenhower/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<EisenhowerTask>> {
    let current = state
        .db
        .get_matrix_task(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("task {id}")))?;

    let text = request.text.unwrap_or(current.text);
    let quadrant = request
        .quadrant
        .map(|q| q.as_str().to_string())
        .unwrap_or(current.quadrant);
    let notes = request.notes.or(current.notes);

    state
        .db
        .update_matrix_task(id, &text, &quadrant, notes.as_deref())
        .await?;

    fetch(&state, id).await
}

/// POST /api/eisenhower/:id/toggle
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EisenhowerTask>> {
    let task = state
        .db
        .get_matrix_task(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("task {id}")))?;

    let completing = !task.is_completed;
    let completed_at = completing.then(Utc::now);
    state
        .db
        .set_matrix_task_completion(id, completing, completed_at)
        .await?;

    fetch(&state, id).await
}

/// PUT /api/eisenhower/:id/quadrant
pub async fn move_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MoveTaskRequest>,
) -> Result<Json<EisenhowerTask>> {
    state
        .db
        .get_matrix_task(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("task {id}")))?;

    state
        .db
        .set_matrix_task_quadrant(id, request.quadrant.as_str())
        .await?;

    fetch(&state, id).await
}

/// DELETE /api/eisenhower/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.db.delete_matrix_task(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("task {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// POST /api/eisenhower/clear-completed
pub async fn clear_completed(
    State(state): State<AppState>,
    Query(query): Query<ClearCompletedQuery>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state
        .db
        .clear_completed_matrix_tasks(query.quadrant.map(|q| q.as_str()))
        .await?;
    Ok(Json(serde_json::json!({ "deleted": deleted })))
}

/// GET /api/eisenhower/summary
pub async fn summary(State(state): State<AppState>) -> Result<Json<MatrixSummary>> {
    let tasks = state.db.list_matrix_tasks().await?;
    Ok(Json(MatrixSummary::compute(&tasks)))
}

/// GET /api/eisenhower/focus
pub async fn focus(State(state): State<AppState>) -> Result<Json<FocusResponse>> {
    let tasks = state.db.list_matrix_tasks().await?;
    Ok(Json(FocusResponse::compute(&tasks)))
}

async fn fetch(state: &AppState, id: Uuid) -> Result<Json<EisenhowerTask>> {
    let task = state
        .db
        .get_matrix_task(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("task {id}")))?;
    Ok(Json(task))
}
