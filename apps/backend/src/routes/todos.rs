//! Todo endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use lifetrack_core::{child_level, DomainError};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/todos
///
/// Top-level todos with the daily-reset derivation applied. Completed
/// ones are excluded unless `include_completed` is set; `filter_daily`
/// narrows to daily todos.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListTodosQuery>,
) -> Result<Json<Vec<TodoView>>> {
    let now = Utc::now();
    let include_completed = query.include_completed.unwrap_or(false);
    let filter_daily = query.filter_daily.unwrap_or(false);

    let todos = state
        .db
        .list_todos()
        .await?
        .into_iter()
        .filter(|t| t.parent_id.is_none())
        .filter(|t| !filter_daily || t.is_daily)
        .map(|t| t.view(now))
        .filter(|v| include_completed || !v.is_completed)
        .collect();

    Ok(Json(todos))
}

/// GET /api/todos/by-priority
pub async fn by_priority(State(state): State<AppState>) -> Result<Json<TodosByPriority>> {
    let now = Utc::now();
    let open: Vec<Todo> = state
        .db
        .list_todos()
        .await?
        .into_iter()
        .filter(|t| !t.view(now).is_completed)
        .collect();

    Ok(Json(TodosByPriority::bucket(open)))
}

/// GET /api/todos/overdue
pub async fn overdue(State(state): State<AppState>) -> Result<Json<Vec<TodoView>>> {
    let now = Utc::now();
    let overdue = state
        .db
        .list_todos()
        .await?
        .into_iter()
        .map(|t| t.view(now))
        .filter(|v| !v.is_completed && v.due_date.is_some_and(|due| due < now))
        .collect();

    Ok(Json(overdue))
}

/// GET /api/todos/:id/subtasks
pub async fn subtasks(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<TodoView>>> {
    let now = Utc::now();
    let children = state
        .db
        .get_subtasks(id)
        .await?
        .into_iter()
        .map(|t| t.view(now))
        .collect();

    Ok(Json(children))
}

/// POST /api/todos
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<Json<Todo>> {
    let level = match request.parent_id {
        Some(parent_id) => {
            let parent = state
                .db
                .get_todo(parent_id)
                .await?
                .ok_or(DomainError::ParentNotFound)?;
            child_level(parent.level)?
        }
        None => 0,
    };

    let todo = state.db.insert_todo(&request, level).await?;
    Ok(Json(todo))
}

/// POST /api/todos/:id/toggle
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoView>> {
    let now = Utc::now();
    let todo = state
        .db
        .get_todo(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("todo {id}")))?;

    let completing = !todo.is_completed;
    let stamp = (completing && todo.is_daily).then_some(now);
    state.db.set_todo_completion(id, completing, stamp).await?;

    let updated = state
        .db
        .get_todo(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("todo {id}")))?;
    Ok(Json(updated.view(now)))
}

/// PUT /api/todos/:id/due-date
pub async fn update_due_date(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDueDateRequest>,
) -> Result<Json<Todo>> {
    ensure_exists(&state, id).await?;
    state.db.set_todo_due_date(id, request.due_date).await?;
    fetch(&state, id).await
}

/// POST /api/todos/:id/toggle-daily
pub async fn toggle_daily(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Todo>> {
    let todo = state
        .db
        .get_todo(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("todo {id}")))?;

    state.db.set_todo_daily(id, !todo.is_daily).await?;
    fetch(&state, id).await
}

/// PUT /api/todos/:id/priority
pub async fn update_priority(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePriorityRequest>,
) -> Result<Json<Todo>> {
    ensure_exists(&state, id).await?;
    state
        .db
        .set_todo_priority(id, request.priority.map(|p| p.as_str()))
        .await?;
    fetch(&state, id).await
}

/// PUT /api/todos/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>> {
    ensure_exists(&state, id).await?;
    state
        .db
        .update_todo(
            id,
            &request.text,
            request.due_date,
            request.is_daily,
            request.priority.map(|p| p.as_str()),
        )
        .await?;
    fetch(&state, id).await
}

/// DELETE /api/todos/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.db.delete_todo(id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("todo {id}")));
    }
    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// POST /api/todos/clear-completed
pub async fn clear_completed(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let deleted = state.db.clear_completed_todos().await?;
    Ok(Json(serde_json::json!({ "deleted": deleted })))
}

/// GET /api/todos/daily-summary
pub async fn daily_summary(State(state): State<AppState>) -> Result<Json<DailySummary>> {
    let now = Utc::now();
    let daily: Vec<TodoView> = state
        .db
        .list_todos()
        .await?
        .into_iter()
        .filter(|t| t.is_daily)
        .map(|t| t.view(now))
        .collect();

    Ok(Json(DailySummary::compute(&daily)))
}

async fn ensure_exists(state: &AppState, id: Uuid) -> Result<()> {
    state
        .db
        .get_todo(id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::NotFound(format!("todo {id}")))
}

async fn fetch(state: &AppState, id: Uuid) -> Result<Json<Todo>> {
    let todo = state
        .db
        .get_todo(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("todo {id}")))?;
    Ok(Json(todo))
}
