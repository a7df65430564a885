//! PostgreSQL database operations.
//!
//! One `Database` wrapper over a connection pool, with per-collection
//! repository methods split by component. Queries only filter and
//! order; derived statistics are computed in-process by the callers.

mod countdowns;
mod eisenhower;
mod habits;
mod runs;
mod settings;
mod todos;
mod workouts;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::{ApiError, Result};

/// Database wrapper with connection pool.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Database(e.into()))?;
        Ok(())
    }

    /// Get the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
