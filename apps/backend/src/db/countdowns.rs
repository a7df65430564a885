//! Countdown repository.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Database;
use crate::error::Result;
use crate::models::{Countdown, CreateCountdownRequest};

impl Database {
    /// Countdowns in creation order. Archived ones are excluded unless
    /// `include_archived` is set.
    pub async fn list_countdowns(&self, include_archived: bool) -> Result<Vec<Countdown>> {
        let countdowns = sqlx::query_as::<_, Countdown>(
            r#"
            SELECT id, title, description, target_date, color, icon, is_archived, created_at
            FROM countdowns
            WHERE NOT is_archived OR $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(include_archived)
        .fetch_all(&self.pool)
        .await?;

        Ok(countdowns)
    }

    pub async fn get_countdown(&self, id: Uuid) -> Result<Option<Countdown>> {
        let countdown = sqlx::query_as::<_, Countdown>(
            r#"
            SELECT id, title, description, target_date, color, icon, is_archived, created_at
            FROM countdowns
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(countdown)
    }

    pub async fn insert_countdown(&self, request: &CreateCountdownRequest) -> Result<Countdown> {
        let countdown = sqlx::query_as::<_, Countdown>(
            r#"
            INSERT INTO countdowns (title, description, target_date, color, icon, is_archived)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING id, title, description, target_date, color, icon, is_archived, created_at
            "#,
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.target_date)
        .bind(&request.color)
        .bind(&request.icon)
        .fetch_one(&self.pool)
        .await?;

        Ok(countdown)
    }

    pub async fn update_countdown(
        &self,
        id: Uuid,
        title: &str,
        description: Option<&str>,
        target_date: DateTime<Utc>,
        color: &str,
        icon: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE countdowns
            SET title = $2, description = $3, target_date = $4, color = $5, icon = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(target_date)
        .bind(color)
        .bind(icon)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn set_countdown_archived(&self, id: Uuid, is_archived: bool) -> Result<()> {
        sqlx::query("UPDATE countdowns SET is_archived = $2 WHERE id = $1")
            .bind(id)
            .bind(is_archived)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete_countdown(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM countdowns WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
