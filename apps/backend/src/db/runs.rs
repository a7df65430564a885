//! Run repository. Pace is computed by the caller before insert.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Database;
use crate::error::Result;
use crate::models::Run;

impl Database {
    /// Runs by date, most recent first.
    pub async fn list_runs(&self) -> Result<Vec<Run>> {
        let runs = sqlx::query_as::<_, Run>(
            r#"
            SELECT id, date, distance_km, duration_min, pace, route, notes,
                   feeling, weather, created_at
            FROM runs
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(runs)
    }

    pub async fn get_run(&self, id: Uuid) -> Result<Option<Run>> {
        let run = sqlx::query_as::<_, Run>(
            r#"
            SELECT id, date, distance_km, duration_min, pace, route, notes,
                   feeling, weather, created_at
            FROM runs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(run)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert_run(
        &self,
        date: DateTime<Utc>,
        distance_km: f64,
        duration_min: f64,
        pace: f64,
        route: Option<&str>,
        notes: Option<&str>,
        feeling: Option<&str>,
        weather: Option<&str>,
    ) -> Result<Run> {
        let run = sqlx::query_as::<_, Run>(
            r#"
            INSERT INTO runs (date, distance_km, duration_min, pace, route, notes,
                              feeling, weather)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, date, distance_km, duration_min, pace, route, notes,
                      feeling, weather, created_at
            "#,
        )
        .bind(date)
        .bind(distance_km)
        .bind(duration_min)
        .bind(pace)
        .bind(route)
        .bind(notes)
        .bind(feeling)
        .bind(weather)
        .fetch_one(&self.pool)
        .await?;

        Ok(run)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_run(
        &self,
        id: Uuid,
        date: DateTime<Utc>,
        distance_km: f64,
        duration_min: f64,
        pace: f64,
        route: Option<&str>,
        notes: Option<&str>,
        feeling: Option<&str>,
        weather: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE runs
            SET date = $2, distance_km = $3, duration_min = $4, pace = $5,
                route = $6, notes = $7, feeling = $8, weather = $9
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(date)
        .bind(distance_km)
        .bind(duration_min)
        .bind(pace)
        .bind(route)
        .bind(notes)
        .bind(feeling)
        .bind(weather)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_run(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM runs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn runs_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Run>> {
        let runs = sqlx::query_as::<_, Run>(
            r#"
            SELECT id, date, distance_km, duration_min, pace, route, notes,
                   feeling, weather, created_at
            FROM runs
            WHERE date >= $1 AND date <= $2
            ORDER BY date DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(runs)
    }
}
