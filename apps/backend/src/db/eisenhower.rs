//! Eisenhower matrix task repository.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Database;
use crate::error::Result;
use crate::models::{CreateTaskRequest, EisenhowerTask};

impl Database {
    pub async fn list_matrix_tasks(&self) -> Result<Vec<EisenhowerTask>> {
        let tasks = sqlx::query_as::<_, EisenhowerTask>(
            r#"
            SELECT id, text, quadrant, is_completed, completed_at, notes, created_at
            FROM eisenhower_tasks
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    pub async fn get_matrix_task(&self, id: Uuid) -> Result<Option<EisenhowerTask>> {
        let task = sqlx::query_as::<_, EisenhowerTask>(
            r#"
            SELECT id, text, quadrant, is_completed, completed_at, notes, created_at
            FROM eisenhower_tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn insert_matrix_task(&self, request: &CreateTaskRequest) -> Result<EisenhowerTask> {
        let task = sqlx::query_as::<_, EisenhowerTask>(
            r#"
            INSERT INTO eisenhower_tasks (text, quadrant, is_completed, notes)
            VALUES ($1, $2, FALSE, $3)
            RETURNING id, text, quadrant, is_completed, completed_at, notes, created_at
            "#,
        )
        .bind(&request.text)
        .bind(request.quadrant.as_str())
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn update_matrix_task(
        &self,
        id: Uuid,
        text: &str,
        quadrant: &str,
        notes: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE eisenhower_tasks
            SET text = $2, quadrant = $3, notes = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(text)
        .bind(quadrant)
        .bind(notes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Set completion; `completed_at` is cleared when reopening.
    pub async fn set_matrix_task_completion(
        &self,
        id: Uuid,
        is_completed: bool,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE eisenhower_tasks
            SET is_completed = $2, completed_at = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(is_completed)
        .bind(completed_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn set_matrix_task_quadrant(&self, id: Uuid, quadrant: &str) -> Result<()> {
        sqlx::query("UPDATE eisenhower_tasks SET quadrant = $2 WHERE id = $1")
            .bind(id)
            .bind(quadrant)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete_matrix_task(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM eisenhower_tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Bulk delete completed tasks, optionally within one quadrant.
    pub async fn clear_completed_matrix_tasks(&self, quadrant: Option<&str>) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM eisenhower_tasks
            WHERE is_completed AND ($1::TEXT IS NULL OR quadrant = $1)
            "#,
        )
        .bind(quadrant)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
