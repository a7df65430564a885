//! Workout and exercise repositories.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Database;
use crate::error::Result;
use crate::models::{AddExerciseRequest, CreateWorkoutRequest, Exercise, Workout};

impl Database {
    /// Workouts by date, most recent first.
    pub async fn list_workouts(&self) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, name, date, duration_min, notes, created_at
            FROM workouts
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(workouts)
    }

    pub async fn get_workout(&self, id: Uuid) -> Result<Option<Workout>> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, name, date, duration_min, notes, created_at
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(workout)
    }

    pub async fn insert_workout(&self, request: &CreateWorkoutRequest) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (name, date, duration_min, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, date, duration_min, notes, created_at
            "#,
        )
        .bind(&request.name)
        .bind(request.date)
        .bind(request.duration_min)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(workout)
    }

    pub async fn update_workout(
        &self,
        id: Uuid,
        name: &str,
        date: DateTime<Utc>,
        duration_min: i32,
        notes: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE workouts
            SET name = $2, date = $3, duration_min = $4, notes = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(date)
        .bind(duration_min)
        .bind(notes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a workout and its exercises atomically.
    pub async fn delete_workout(&self, id: Uuid) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM exercises WHERE workout_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn insert_exercise(
        &self,
        workout_id: Uuid,
        request: &AddExerciseRequest,
    ) -> Result<Exercise> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (workout_id, exercise_name, sets, reps, rest_seconds,
                                   notes, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, workout_id, exercise_name, sets, reps, rest_seconds, notes, position
            "#,
        )
        .bind(workout_id)
        .bind(&request.exercise_name)
        .bind(request.sets)
        .bind(request.reps)
        .bind(request.rest_seconds)
        .bind(&request.notes)
        .bind(request.position)
        .fetch_one(&self.pool)
        .await?;

        Ok(exercise)
    }

    pub async fn get_exercise(&self, id: Uuid) -> Result<Option<Exercise>> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, workout_id, exercise_name, sets, reps, rest_seconds, notes, position
            FROM exercises
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(exercise)
    }

    pub async fn update_exercise(
        &self,
        id: Uuid,
        exercise_name: &str,
        sets: i32,
        reps: i32,
        rest_seconds: Option<i32>,
        notes: Option<&str>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE exercises
            SET exercise_name = $2, sets = $3, reps = $4, rest_seconds = $5, notes = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(exercise_name)
        .bind(sets)
        .bind(reps)
        .bind(rest_seconds)
        .bind(notes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_exercise(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Exercises of one workout in display order.
    pub async fn exercises_for(&self, workout_id: Uuid) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, workout_id, exercise_name, sets, reps, rest_seconds, notes, position
            FROM exercises
            WHERE workout_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(workout_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(exercises)
    }

    /// Every logged exercise, for cross-workout statistics.
    pub async fn all_exercises(&self) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, workout_id, exercise_name, sets, reps, rest_seconds, notes, position
            FROM exercises
            ORDER BY position ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(exercises)
    }

    pub async fn workouts_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, name, date, duration_min, notes, created_at
            FROM workouts
            WHERE date >= $1 AND date <= $2
            ORDER BY date DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(workouts)
    }
}
