//! Eisenhower matrix API tests.
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

/// Test creating a task and finding it in its matrix bucket.
#[tokio::test]
#[ignore = "requires database"]
async fn test_matrix_buckets_tasks() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let task: serde_json::Value = server
        .post("/api/eisenhower")
        .json(&fixtures::create_task_request("pay rent", "urgent-important"))
        .await
        .json();
    let id = id_of(&task);

    let matrix: serde_json::Value = server.get("/api/eisenhower/matrix").await.json();
    assert!(matrix["urgent_important"]
        .as_array()
        .unwrap()
        .iter()
        .any(|t| id_of(t) == id));

    ctx.cleanup_task(id).await;
}

/// Test toggle stamps completed_at and clears it on reopen.
#[tokio::test]
#[ignore = "requires database"]
async fn test_toggle_stamps_and_clears_completed_at() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let task: serde_json::Value = server
        .post("/api/eisenhower")
        .json(&fixtures::create_task_request("review PRs", "not-urgent-important"))
        .await
        .json();
    let id = id_of(&task);

    let completed: serde_json::Value = server
        .post(&format!("/api/eisenhower/{id}/toggle"))
        .await
        .json();
    assert_eq!(completed["is_completed"], true);
    assert!(!completed["completed_at"].is_null());

    let reopened: serde_json::Value = server
        .post(&format!("/api/eisenhower/{id}/toggle"))
        .await
        .json();
    assert_eq!(reopened["is_completed"], false);
    assert!(reopened["completed_at"].is_null());

    ctx.cleanup_task(id).await;
}

/// Test moving a task between quadrants.
#[tokio::test]
#[ignore = "requires database"]
async fn test_move_task_changes_quadrant() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let task: serde_json::Value = server
        .post("/api/eisenhower")
        .json(&fixtures::create_task_request("inbox zero", "urgent-not-important"))
        .await
        .json();
    let id = id_of(&task);

    let moved: serde_json::Value = server
        .put(&format!("/api/eisenhower/{id}/quadrant"))
        .json(&serde_json::json!({ "quadrant": "not-urgent-not-important" }))
        .await
        .json();
    assert_eq!(moved["quadrant"], "not-urgent-not-important");

    ctx.cleanup_task(id).await;
}

/// Test clear-completed scoped to one quadrant.
#[tokio::test]
#[ignore = "requires database"]
async fn test_clear_completed_scoped_to_quadrant() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let scoped: serde_json::Value = server
        .post("/api/eisenhower")
        .json(&fixtures::create_task_request("book flights", "urgent-important"))
        .await
        .json();
    let scoped_id = id_of(&scoped);
    let other: serde_json::Value = server
        .post("/api/eisenhower")
        .json(&fixtures::create_task_request("sort photos", "not-urgent-not-important"))
        .await
        .json();
    let other_id = id_of(&other);

    server.post(&format!("/api/eisenhower/{scoped_id}/toggle")).await;
    server.post(&format!("/api/eisenhower/{other_id}/toggle")).await;

    let response = server
        .post("/api/eisenhower/clear-completed")
        .add_query_param("quadrant", "urgent-important")
        .await;
    response.assert_status_ok();

    let all: Vec<serde_json::Value> = server
        .get("/api/eisenhower")
        .add_query_param("include_completed", "true")
        .await
        .json();
    assert!(!all.iter().any(|t| id_of(t) == scoped_id));
    assert!(all.iter().any(|t| id_of(t) == other_id));

    ctx.cleanup_task(other_id).await;
}

/// Test the focus heuristic prefers open urgent-important work.
#[tokio::test]
#[ignore = "requires database"]
async fn test_focus_prefers_urgent_important() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let task: serde_json::Value = server
        .post("/api/eisenhower")
        .json(&fixtures::create_task_request("fix outage", "urgent-important"))
        .await
        .json();
    let id = id_of(&task);

    let focus: serde_json::Value = server.get("/api/eisenhower/focus").await.json();
    assert_eq!(focus["priority"], "urgent-important");
    assert!(focus["urgent_important_count"].as_u64().unwrap() >= 1);

    ctx.cleanup_task(id).await;
}

/// Test toggling a missing task returns 404.
#[tokio::test]
#[ignore = "requires database"]
async fn test_toggle_missing_task_not_found() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post(&format!("/api/eisenhower/{}/toggle", Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    drop(ctx);
}
