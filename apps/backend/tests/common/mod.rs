//! Common test utilities and fixtures for integration tests.
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL
//! env var).

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use lifetrack_backend::db::Database;
use lifetrack_backend::{app, AppState};

/// Test context containing database connection and the API router.
///
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);
        let app = app(AppState { db: db.clone() });

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Delete a todo and any of its subtasks.
    pub async fn cleanup_todo(&self, id: Uuid) {
        let _ = sqlx::query("DELETE FROM todos WHERE parent_id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await;
        let _ = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await;
    }

    /// Delete a habit and its completion log.
    pub async fn cleanup_habit(&self, id: Uuid) {
        let _ = sqlx::query("DELETE FROM habit_completions WHERE habit_id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await;
        let _ = sqlx::query("DELETE FROM habits WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await;
    }

    pub async fn cleanup_countdown(&self, id: Uuid) {
        let _ = sqlx::query("DELETE FROM countdowns WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await;
    }

    pub async fn cleanup_task(&self, id: Uuid) {
        let _ = sqlx::query("DELETE FROM eisenhower_tasks WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await;
    }

    /// Delete a workout and its exercises.
    pub async fn cleanup_workout(&self, id: Uuid) {
        let _ = sqlx::query("DELETE FROM exercises WHERE workout_id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await;
        let _ = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await;
    }

    pub async fn cleanup_run(&self, id: Uuid) {
        let _ = sqlx::query("DELETE FROM runs WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await;
    }

    pub async fn cleanup_settings(&self, user_id: &str) {
        let _ = sqlx::query("DELETE FROM user_settings WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await;
    }

    /// Count rows for a habit's completion log directly.
    pub async fn count_completions(&self, habit_id: Uuid) -> i64 {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM habit_completions WHERE habit_id = $1")
                .bind(habit_id)
                .fetch_one(self.db.pool())
                .await
                .expect("Failed to count completions");
        count
    }

    /// Count exercise rows for a workout directly.
    pub async fn count_exercises(&self, workout_id: Uuid) -> i64 {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM exercises WHERE workout_id = $1")
                .bind(workout_id)
                .fetch_one(self.db.pool())
                .await
                .expect("Failed to count exercises");
        count
    }
}
