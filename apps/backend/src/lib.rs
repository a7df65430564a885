pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

/// Build the full API router. Shared between the server binary and
/// the integration tests.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Todo routes
        .route("/api/todos", get(routes::todos::list))
        .route("/api/todos", post(routes::todos::create))
        .route("/api/todos/by-priority", get(routes::todos::by_priority))
        .route("/api/todos/overdue", get(routes::todos::overdue))
        .route("/api/todos/daily-summary", get(routes::todos::daily_summary))
        .route(
            "/api/todos/clear-completed",
            post(routes::todos::clear_completed),
        )
        .route("/api/todos/:id/subtasks", get(routes::todos::subtasks))
        .route("/api/todos/:id/toggle", post(routes::todos::toggle))
        .route(
            "/api/todos/:id/toggle-daily",
            post(routes::todos::toggle_daily),
        )
        .route("/api/todos/:id/due-date", put(routes::todos::update_due_date))
        .route("/api/todos/:id/priority", put(routes::todos::update_priority))
        .route("/api/todos/:id", put(routes::todos::update))
        .route("/api/todos/:id", delete(routes::todos::delete))
        // Habit routes
        .route("/api/habits", get(routes::habits::list))
        .route("/api/habits", post(routes::habits::create))
        .route(
            "/api/habits/today-progress",
            get(routes::habits::today_progress),
        )
        .route("/api/habits/summary", get(routes::habits::summary))
        .route("/api/habits/:id/stats", get(routes::habits::stats))
        .route("/api/habits/:id/complete", post(routes::habits::complete))
        .route("/api/habits/:id/undo", post(routes::habits::undo))
        .route("/api/habits/:id/history", get(routes::habits::history))
        .route(
            "/api/habits/:id/toggle-active",
            post(routes::habits::toggle_active),
        )
        .route("/api/habits/:id", put(routes::habits::update))
        .route("/api/habits/:id", delete(routes::habits::delete))
        // Countdown routes
        .route("/api/countdowns", get(routes::countdowns::list))
        .route("/api/countdowns", post(routes::countdowns::create))
        .route("/api/countdowns/active", get(routes::countdowns::active))
        .route("/api/countdowns/with-time", get(routes::countdowns::with_time))
        .route("/api/countdowns/upcoming", get(routes::countdowns::upcoming))
        .route("/api/countdowns/summary", get(routes::countdowns::summary))
        .route(
            "/api/countdowns/:id/time-remaining",
            get(routes::countdowns::time_remaining),
        )
        .route(
            "/api/countdowns/:id/archive",
            post(routes::countdowns::archive),
        )
        .route(
            "/api/countdowns/:id/unarchive",
            post(routes::countdowns::unarchive),
        )
        .route("/api/countdowns/:id", put(routes::countdowns::update))
        .route("/api/countdowns/:id", delete(routes::countdowns::delete))
        // Eisenhower routes
        .route("/api/eisenhower", get(routes::eisenhower::list))
        .route("/api/eisenhower", post(routes::eisenhower::create))
        .route(
            "/api/eisenhower/quadrant/:quadrant",
            get(routes::eisenhower::by_quadrant),
        )
        .route("/api/eisenhower/matrix", get(routes::eisenhower::matrix))
        .route("/api/eisenhower/summary", get(routes::eisenhower::summary))
        .route("/api/eisenhower/focus", get(routes::eisenhower::focus))
        .route(
            "/api/eisenhower/clear-completed",
            post(routes::eisenhower::clear_completed),
        )
        .route("/api/eisenhower/:id/toggle", post(routes::eisenhower::toggle))
        .route(
            "/api/eisenhower/:id/quadrant",
            put(routes::eisenhower::move_task),
        )
        .route("/api/eisenhower/:id", put(routes::eisenhower::update))
        .route("/api/eisenhower/:id", delete(routes::eisenhower::delete))
        // Workout routes
        .route("/api/workouts", get(routes::workouts::list))
        .route("/api/workouts", post(routes::workouts::create))
        .route("/api/workouts/recent", get(routes::workouts::recent))
        .route("/api/workouts/stats", get(routes::workouts::stats))
        .route(
            "/api/workouts/exercise-stats",
            get(routes::workouts::exercise_stats),
        )
        .route("/api/workouts/calendar", get(routes::workouts::calendar))
        .route("/api/workouts/streak", get(routes::workouts::workout_streak))
        .route(
            "/api/workouts/suggested-exercises",
            get(routes::workouts::suggested),
        )
        .route(
            "/api/workouts/exercises/:id",
            put(routes::workouts::update_exercise),
        )
        .route(
            "/api/workouts/exercises/:id",
            delete(routes::workouts::delete_exercise),
        )
        .route(
            "/api/workouts/:id/exercises",
            post(routes::workouts::add_exercise),
        )
        .route("/api/workouts/:id", get(routes::workouts::get))
        .route("/api/workouts/:id", put(routes::workouts::update))
        .route("/api/workouts/:id", delete(routes::workouts::delete))
        // Run routes
        .route("/api/runs", get(routes::runs::list))
        .route("/api/runs", post(routes::runs::create))
        .route("/api/runs/recent", get(routes::runs::recent))
        .route("/api/runs/range", get(routes::runs::range))
        .route("/api/runs/stats", get(routes::runs::stats))
        .route("/api/runs/weekly-summary", get(routes::runs::weekly_summary))
        .route(
            "/api/runs/monthly-summary",
            get(routes::runs::monthly_summary),
        )
        .route("/api/runs/personal-bests", get(routes::runs::personal_bests))
        .route("/api/runs/streak", get(routes::runs::run_streak))
        .route("/api/runs/calendar", get(routes::runs::calendar))
        .route("/api/runs/pace-zones", get(routes::runs::pace_zones))
        .route("/api/runs/:id", put(routes::runs::update))
        .route("/api/runs/:id", delete(routes::runs::delete))
        // Settings routes
        .route("/api/settings/:user_id", get(routes::settings::get))
        .route("/api/settings/:user_id", put(routes::settings::update))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set");

    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let state = AppState { db: Arc::new(db) };

    let router = app(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
