//! Habit and completion-log repositories.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Database;
use crate::error::Result;
use crate::models::{CreateHabitRequest, Habit, HabitCompletion};

impl Database {
    /// All habits, newest first. Pass `include_inactive` to also get
    /// deactivated ones.
    pub async fn list_habits(&self, include_inactive: bool) -> Result<Vec<Habit>> {
        let habits = sqlx::query_as::<_, Habit>(
            r#"
            SELECT id, name, description, color, icon, frequency, target_count,
                   is_active, created_at
            FROM habits
            WHERE is_active OR $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await?;

        Ok(habits)
    }

    pub async fn get_habit(&self, id: Uuid) -> Result<Option<Habit>> {
        let habit = sqlx::query_as::<_, Habit>(
            r#"
            SELECT id, name, description, color, icon, frequency, target_count,
                   is_active, created_at
            FROM habits
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(habit)
    }

    pub async fn insert_habit(&self, request: &CreateHabitRequest) -> Result<Habit> {
        let habit = sqlx::query_as::<_, Habit>(
            r#"
            INSERT INTO habits (name, description, color, icon, frequency, target_count, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE)
            RETURNING id, name, description, color, icon, frequency, target_count,
                      is_active, created_at
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.color)
        .bind(&request.icon)
        .bind(request.frequency.as_str())
        .bind(request.target_count)
        .fetch_one(&self.pool)
        .await?;

        Ok(habit)
    }

    /// Full edit of the user-editable fields. Callers merge optional
    /// request fields into the existing row first.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_habit(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
        color: &str,
        icon: Option<&str>,
        frequency: &str,
        target_count: i32,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE habits
            SET name = $2, description = $3, color = $4, icon = $5,
                frequency = $6, target_count = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(color)
        .bind(icon)
        .bind(frequency)
        .bind(target_count)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn set_habit_active(&self, id: Uuid, is_active: bool) -> Result<()> {
        sqlx::query("UPDATE habits SET is_active = $2 WHERE id = $1")
            .bind(id)
            .bind(is_active)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete a habit and its completion log atomically.
    pub async fn delete_habit(&self, id: Uuid) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM habit_completions WHERE habit_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM habits WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn insert_completion(
        &self,
        habit_id: Uuid,
        completed_at: DateTime<Utc>,
        note: Option<&str>,
    ) -> Result<HabitCompletion> {
        let completion = sqlx::query_as::<_, HabitCompletion>(
            r#"
            INSERT INTO habit_completions (habit_id, completed_at, note)
            VALUES ($1, $2, $3)
            RETURNING id, habit_id, completed_at, note
            "#,
        )
        .bind(habit_id)
        .bind(completed_at)
        .bind(note)
        .fetch_one(&self.pool)
        .await?;

        Ok(completion)
    }

    /// Full completion log for one habit, newest first.
    pub async fn completions_for(&self, habit_id: Uuid) -> Result<Vec<HabitCompletion>> {
        let completions = sqlx::query_as::<_, HabitCompletion>(
            r#"
            SELECT id, habit_id, completed_at, note
            FROM habit_completions
            WHERE habit_id = $1
            ORDER BY completed_at DESC
            "#,
        )
        .bind(habit_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(completions)
    }

    pub async fn completions_in_range(
        &self,
        habit_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<HabitCompletion>> {
        let completions = sqlx::query_as::<_, HabitCompletion>(
            r#"
            SELECT id, habit_id, completed_at, note
            FROM habit_completions
            WHERE habit_id = $1 AND completed_at >= $2 AND completed_at <= $3
            ORDER BY completed_at DESC
            "#,
        )
        .bind(habit_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(completions)
    }

    /// Remove the most recent completion, if any.
    pub async fn undo_last_completion(&self, habit_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM habit_completions
            WHERE id IN (
                SELECT id FROM habit_completions
                WHERE habit_id = $1
                ORDER BY completed_at DESC
                LIMIT 1
            )
            "#,
        )
        .bind(habit_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_completions_since(
        &self,
        habit_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM habit_completions
            WHERE habit_id = $1 AND completed_at >= $2
            "#,
        )
        .bind(habit_id)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
