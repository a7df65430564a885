//! Workout API tests.
//!
//! These tests require a running PostgreSQL database.
//! Set DATABASE_URL environment variable before running.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use uuid::Uuid;

use common::fixtures;
use common::TestContext;

fn id_of(body: &serde_json::Value) -> Uuid {
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
}

/// Test creating a workout with exercises ordered by position.
#[tokio::test]
#[ignore = "requires database"]
async fn test_workout_with_ordered_exercises() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let workout: serde_json::Value = server
        .post("/api/workouts")
        .json(&fixtures::create_workout_request("push day", 0, 40))
        .await
        .json();
    let id = id_of(&workout);

    server
        .post(&format!("/api/workouts/{id}/exercises"))
        .json(&fixtures::add_exercise_request("Dips", 3, 10, 1))
        .await;
    server
        .post(&format!("/api/workouts/{id}/exercises"))
        .json(&fixtures::add_exercise_request("Push-ups", 3, 15, 0))
        .await;

    let detailed: serde_json::Value = server.get(&format!("/api/workouts/{id}")).await.json();
    let exercises = detailed["exercises"].as_array().unwrap();
    assert_eq!(exercises.len(), 2);
    assert_eq!(exercises[0]["exercise_name"], "Push-ups");
    assert_eq!(exercises[1]["exercise_name"], "Dips");

    ctx.cleanup_workout(id).await;
}

/// Test that deleting a workout cascades its exercises.
#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_workout_cascades_exercises() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let workout: serde_json::Value = server
        .post("/api/workouts")
        .json(&fixtures::create_workout_request("leg day", 0, 50))
        .await
        .json();
    let id = id_of(&workout);

    server
        .post(&format!("/api/workouts/{id}/exercises"))
        .json(&fixtures::add_exercise_request("Squats", 5, 10, 0))
        .await;

    let response = server.delete(&format!("/api/workouts/{id}")).await;
    response.assert_status_ok();
    assert_eq!(ctx.count_exercises(id).await, 0);
}

/// Test exercise stats match case-insensitively.
#[tokio::test]
#[ignore = "requires database"]
async fn test_exercise_stats_case_insensitive() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let workout: serde_json::Value = server
        .post("/api/workouts")
        .json(&fixtures::create_workout_request("pull day", 0, 35))
        .await
        .json();
    let id = id_of(&workout);

    // Unique name keeps this test independent of existing data.
    let name = format!("Test-Rows-{}", Uuid::new_v4());
    server
        .post(&format!("/api/workouts/{id}/exercises"))
        .json(&fixtures::add_exercise_request(&name, 3, 12, 0))
        .await;
    server
        .post(&format!("/api/workouts/{id}/exercises"))
        .json(&fixtures::add_exercise_request(&name.to_lowercase(), 4, 8, 1))
        .await;

    let stats: serde_json::Value = server
        .get("/api/workouts/exercise-stats")
        .add_query_param("name", name.to_uppercase())
        .await
        .json();
    assert_eq!(stats["total_sessions"], 2);
    assert_eq!(stats["total_sets"], 7);
    // 3*12 + 4*8 = 68
    assert_eq!(stats["total_reps"], 68);
    assert_eq!(stats["max_reps"], 12);
    assert_eq!(stats["personal_best"]["reps"], 12);

    ctx.cleanup_workout(id).await;
}

/// Test partial exercise update keeps the other fields.
#[tokio::test]
#[ignore = "requires database"]
async fn test_update_exercise_partial() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let workout: serde_json::Value = server
        .post("/api/workouts")
        .json(&fixtures::create_workout_request("core", 0, 20))
        .await
        .json();
    let workout_id = id_of(&workout);

    let exercise: serde_json::Value = server
        .post(&format!("/api/workouts/{workout_id}/exercises"))
        .json(&fixtures::add_exercise_request("Plank", 3, 1, 0))
        .await
        .json();
    let exercise_id = id_of(&exercise);

    let updated: serde_json::Value = server
        .put(&format!("/api/workouts/exercises/{exercise_id}"))
        .json(&serde_json::json!({ "sets": 4 }))
        .await
        .json();
    assert_eq!(updated["sets"], 4);
    assert_eq!(updated["exercise_name"], "Plank");
    assert_eq!(updated["reps"], 1);

    ctx.cleanup_workout(workout_id).await;
}

/// Test the static suggested-exercise catalog.
#[tokio::test]
#[ignore = "requires database"]
async fn test_suggested_exercises_catalog() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/workouts/suggested-exercises").await;
    response.assert_status_ok();
    let catalog: Vec<serde_json::Value> = response.json();
    assert_eq!(catalog.len(), 20);
    assert!(catalog.iter().all(|e| !e["name"].as_str().unwrap().is_empty()));

    drop(ctx);
}

/// Test streak response shape after logging a workout today.
#[tokio::test]
#[ignore = "requires database"]
async fn test_workout_streak_counts_today() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let workout: serde_json::Value = server
        .post("/api/workouts")
        .json(&fixtures::create_workout_request("run prep", 0, 15))
        .await
        .json();
    let id = id_of(&workout);

    let streak: serde_json::Value = server.get("/api/workouts/streak").await.json();
    assert!(streak["current_streak"].as_u64().unwrap() >= 1);
    assert!(streak["longest_streak"].as_u64().unwrap() >= 1);

    ctx.cleanup_workout(id).await;
}

/// Test getting a missing workout returns 404.
#[tokio::test]
#[ignore = "requires database"]
async fn test_get_missing_workout_not_found() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get(&format!("/api/workouts/{}", Uuid::new_v4())).await;
    response.assert_status(StatusCode::NOT_FOUND);

    drop(ctx);
}
