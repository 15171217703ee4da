#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use kanban_board::api::{create_router, AppState};
use kanban_board::config::Config;
use kanban_board::domain::{Board, Column, Task, TaskStatus};
use kanban_board::infrastructure::{db, BoardStore, SqliteBoardStore, SqliteTaskStore, TaskStore};
use kanban_board::services::SequentialIdGenerator;

pub async fn setup_test_db() -> SqlitePool {
    db::init_memory_db()
        .await
        .expect("Failed to create test database")
}

pub fn test_config() -> Arc<Config> {
    Arc::new(Config {
        port: 3000,
        database_url: "sqlite::memory:".to_string(),
        frontend_dir: "../frontend/dist".to_string(),
        cors_origin: "http://localhost:5173".to_string(),
        reconcile_on_startup: false,
    })
}

pub fn test_app(pool: &SqlitePool) -> Router {
    let config = test_config();
    let state = AppState::new(
        Arc::new(SqliteBoardStore::new(pool.clone())),
        Arc::new(SqliteTaskStore::new(pool.clone())),
        Arc::new(SequentialIdGenerator::new("gen")),
        config.clone(),
    );
    create_router(state, &config)
}

/// Board "1" with col-1 holding task-1 and an empty col-2; task-1 stored too.
pub async fn seed_board_with_task(pool: &SqlitePool) {
    SqliteBoardStore::new(pool.clone())
        .save(&Board {
            id: "1".into(),
            name: "Board 1".into(),
            columns: vec![
                Column {
                    id: "col-1".into(),
                    name: "Column 1".into(),
                    task_ids: vec!["task-1".into()],
                },
                Column::new("col-2", "Column 2"),
            ],
        })
        .await
        .expect("Failed to seed board");

    SqliteTaskStore::new(pool.clone())
        .save(&Task {
            id: "task-1".into(),
            column_id: "col-1".into(),
            title: "Task 1".into(),
            description: "This is task 1".into(),
            status: TaskStatus::Todo,
            deadline: Some("2025-01-01T00:00:00Z".parse().unwrap()),
        })
        .await
        .expect("Failed to seed task");
}

pub async fn make_request(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri).method(method);

    if body.is_some() {
        request = request.header("content-type", "application/json");
    }

    let request = request
        .body(Body::from(body.unwrap_or_default()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body.to_vec()).unwrap();

    (status, body_str)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = make_request(app, "GET", uri, None).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).unwrap()
    };
    (status, value)
}
