//! Todo repository.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Database;
use crate::error::Result;
use crate::models::{CreateTodoRequest, Todo};

impl Database {
    /// All todos, newest first.
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, text, is_completed, due_date, is_daily, last_completed_at,
                   priority, category, parent_id, level, created_at
            FROM todos
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    pub async fn get_todo(&self, id: Uuid) -> Result<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, text, is_completed, due_date, is_daily, last_completed_at,
                   priority, category, parent_id, level, created_at
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    /// Children of a parent todo, newest first.
    pub async fn get_subtasks(&self, parent_id: Uuid) -> Result<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, text, is_completed, due_date, is_daily, last_completed_at,
                   priority, category, parent_id, level, created_at
            FROM todos
            WHERE parent_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    /// Insert a todo with its precomputed hierarchy level.
    pub async fn insert_todo(&self, request: &CreateTodoRequest, level: i32) -> Result<Todo> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (text, is_completed, due_date, is_daily, priority, category,
                               parent_id, level)
            VALUES ($1, FALSE, $2, $3, $4, $5, $6, $7)
            RETURNING id, text, is_completed, due_date, is_daily, last_completed_at,
                      priority, category, parent_id, level, created_at
            "#,
        )
        .bind(&request.text)
        .bind(request.due_date)
        .bind(request.is_daily)
        .bind(request.priority.map(|p| p.as_str()))
        .bind(&request.category)
        .bind(request.parent_id)
        .bind(level)
        .fetch_one(&self.pool)
        .await?;

        Ok(todo)
    }

    /// Set the completion flag; stamps last_completed_at only when a
    /// timestamp is supplied.
    pub async fn set_todo_completion(
        &self,
        id: Uuid,
        is_completed: bool,
        last_completed_at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE todos
            SET is_completed = $2,
                last_completed_at = COALESCE($3, last_completed_at)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(is_completed)
        .bind(last_completed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn set_todo_due_date(&self, id: Uuid, due_date: Option<DateTime<Utc>>) -> Result<()> {
        sqlx::query("UPDATE todos SET due_date = $2 WHERE id = $1")
            .bind(id)
            .bind(due_date)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn set_todo_daily(&self, id: Uuid, is_daily: bool) -> Result<()> {
        sqlx::query("UPDATE todos SET is_daily = $2 WHERE id = $1")
            .bind(id)
            .bind(is_daily)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn set_todo_priority(&self, id: Uuid, priority: Option<&str>) -> Result<()> {
        sqlx::query("UPDATE todos SET priority = $2 WHERE id = $1")
            .bind(id)
            .bind(priority)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Full edit of the user-editable fields.
    pub async fn update_todo(
        &self,
        id: Uuid,
        text: &str,
        due_date: Option<DateTime<Utc>>,
        is_daily: bool,
        priority: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE todos
            SET text = $2, due_date = $3, is_daily = $4, priority = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(text)
        .bind(due_date)
        .bind(is_daily)
        .bind(priority)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_todo(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Bulk delete completed todos. Daily todos are never removed.
    pub async fn clear_completed_todos(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM todos WHERE is_completed AND NOT is_daily")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
