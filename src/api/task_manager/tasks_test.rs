//! Integration tests for the task endpoints.

use axum::Router;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::api::test_support::send;
use crate::api::{AppState, task_manager};
use crate::db::{SqliteTaskManagerDatabase, TaskManagerDatabase};

async fn test_app() -> Router {
    let db = SqliteTaskManagerDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    task_manager::create_router(AppState::new(db))
}

async fn create_task(app: &Router, payload: Value) -> Value {
    let (status, body) = send(app, "POST", "/tasks/", Some(payload)).await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body
}

fn task(title: &str, status: &str, priority: &str, project_id: i64) -> Value {
    json!({
        "title": title,
        "description": "",
        "status": status,
        "priority": priority,
        "due_date": "2025-03-01T17:00:00",
        "project_id": project_id
    })
}

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_task() {
    let app = test_app().await;

    let created = create_task(
        &app,
        json!({
            "title": "Write notes",
            "description": "Release notes",
            "status": "IN_PROGRESS",
            "priority": "HIGH",
            "due_date": "2025-03-01T17:00:00",
            "project_id": 1,
            "assigned_to_id": 2
        }),
    )
    .await;
    assert_eq!(created["title"], "Write notes");
    assert_eq!(created["status"], "IN_PROGRESS");
    assert_eq!(created["priority"], "HIGH");
    assert_eq!(created["due_date"], "2025-03-01T17:00:00");
    assert_eq!(created["project_id"], 1);
    assert_eq!(created["assigned_to_id"], 2);

    let (status, fetched) = send(&app, "GET", &format!("/tasks/{}", created["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_status_or_priority_is_400() {
    let app = test_app().await;
    let created = create_task(&app, task("Ship", "DONE", "HIGH", 1)).await;
    let id = created["id"].as_i64().unwrap();

    let without_enums = json!({
        "title": "Ship",
        "description": "",
        "due_date": "2025-03-01T17:00:00",
        "project_id": 1
    });

    let (status, body) = send(&app, "POST", "/tasks/", Some(without_enums.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    let (status, _) = send(&app, "PUT", &format!("/tasks/{id}"), Some(without_enums)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The stored task is untouched by the rejected replace
    let (_, fetched) = send(&app, "GET", &format!("/tasks/{id}"), None).await;
    assert_eq!(fetched["status"], "DONE");
    assert_eq!(fetched["priority"], "HIGH");
    assert!(fetched["assigned_to_id"].is_null());
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_enum_value_is_400() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/tasks/", Some(task("Bad", "STARTED", "LOW", 1))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    let (status, _) = send(&app, "GET", "/tasks/?status=STARTED", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_filters_are_exact_and_combined() {
    let app = test_app().await;
    create_task(&app, task("a", "TODO", "HIGH", 1)).await;
    create_task(&app, task("b", "DONE", "HIGH", 1)).await;
    create_task(&app, task("c", "TODO", "LOW", 2)).await;
    create_task(&app, task("d", "TODO", "HIGH", 2)).await;

    let (status, body) = send(&app, "GET", "/tasks/?status=TODO", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["a", "c", "d"]);

    let (_, body) = send(&app, "GET", "/tasks/?status=TODO&priority=HIGH", None).await;
    assert_eq!(titles(&body), vec!["a", "d"]);

    let (_, body) = send(&app, "GET", "/tasks?project_id=2&priority=HIGH", None).await;
    assert_eq!(titles(&body), vec!["d"]);

    let (_, body) = send(&app, "GET", "/tasks/?project_id=0", None).await;
    assert!(body.as_array().unwrap().is_empty());

    let (_, body) = send(&app, "GET", "/tasks/?status=TODO&skip=1&limit=1", None).await;
    assert_eq!(titles(&body), vec!["c"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_task() {
    let app = test_app().await;
    let created = create_task(&app, task("Draft", "TODO", "LOW", 1)).await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/tasks/{id}"),
        Some(task("Final", "DONE", "HIGH", 3)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Final");
    assert_eq!(updated["status"], "DONE");
    assert_eq!(updated["project_id"], 3);

    let (status, deleted) = send(&app, "DELETE", &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, updated);

    let (status, body) = send(&app, "GET", &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Task not found");

    let (status, _) = send(&app, "PUT", &format!("/tasks/{id}"), Some(task("x", "TODO", "LOW", 1))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn health_returns_ok() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
