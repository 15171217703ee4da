mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{get_json, make_request, seed_board_with_task, setup_test_db, test_app};

#[tokio::test]
async fn test_health_check() {
    let pool = setup_test_db().await;
    let app = test_app(&pool);

    let (status, body) = make_request(app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\":\"ok\""));
}

#[tokio::test]
async fn test_list_boards_empty() {
    let pool = setup_test_db().await;
    let (status, boards) = get_json(test_app(&pool), "/api/boards").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(boards, json!([]));
}

#[tokio::test]
async fn test_create_board_ignores_client_id() {
    let pool = setup_test_db().await;
    let app = test_app(&pool);

    let (status, body) = make_request(
        app.clone(),
        "POST",
        "/api/boards",
        Some(json!({ "id": "client-chosen", "name": "Board 1", "columns": [] }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let board: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(board["id"], "gen-1");
    assert_eq!(board["name"], "Board 1");
    assert_eq!(board["columns"], json!([]));

    let (status, fetched) = get_json(app.clone(), "/api/boards/gen-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, board);

    let (status, _) = get_json(app, "/api/boards/client-chosen").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_board_not_found_message() {
    let pool = setup_test_db().await;
    let (status, body) = get_json(test_app(&pool), "/api/boards/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Board with ID 999 not found");
    assert_eq!(body["statusCode"], 404);
}

#[tokio::test]
async fn test_update_board_adds_columns_and_keeps_existing_ids() {
    let pool = setup_test_db().await;
    seed_board_with_task(&pool).await;
    let app = test_app(&pool);

    let update = json!({
        "name": "Renamed",
        "columns": [
            { "id": "col-1", "name": "Doing", "tasks": [] },
            { "id": "col-2", "name": "Column 2", "tasks": [] },
            { "name": "Done" }
        ]
    });
    let (status, body) =
        make_request(app.clone(), "PUT", "/api/boards/1", Some(update.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    let board: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(board["name"], "Renamed");
    assert_eq!(board["columns"][0]["id"], "col-1");
    assert_eq!(board["columns"][0]["name"], "Doing");
    assert_eq!(board["columns"][0]["tasks"], json!(["task-1"]));
    assert_eq!(board["columns"][2]["id"], "gen-1");
    assert_eq!(board["columns"][2]["tasks"], json!([]));

    let (status, _) = get_json(app, "/api/tasks/task-1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_board_removing_column_deletes_its_tasks() {
    let pool = setup_test_db().await;
    seed_board_with_task(&pool).await;
    let app = test_app(&pool);

    let (status, _) = make_request(
        app.clone(),
        "PUT",
        "/api/boards/1",
        Some(json!({ "name": "Board 1", "columns": [] }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_json(app.clone(), "/api/tasks/task-1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task with ID task-1 not found");

    let (status, board) = get_json(app, "/api/boards/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board["columns"], json!([]));
}

#[tokio::test]
async fn test_update_board_with_new_column_id_ignores_its_task_list() {
    let pool = setup_test_db().await;
    seed_board_with_task(&pool).await;
    let app = test_app(&pool);

    let update = json!({
        "name": "Board 1",
        "columns": [
            { "id": "col-1", "name": "Column 1", "tasks": ["task-1"] },
            { "id": "col-2", "name": "Column 2", "tasks": [] },
            { "id": "col-x", "name": "Extra", "tasks": ["task-1"] }
        ]
    });
    let (status, body) =
        make_request(app.clone(), "PUT", "/api/boards/1", Some(update.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    let board: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(board["columns"][2]["id"], "col-x");
    assert_eq!(board["columns"][2]["tasks"], json!([]));

    let (_, tasks) = get_json(app, "/api/tasks/column/col-x").await;
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn test_update_board_rejects_column_of_another_board() {
    let pool = setup_test_db().await;
    seed_board_with_task(&pool).await;
    let app = test_app(&pool);

    let (status, _) = make_request(
        app.clone(),
        "POST",
        "/api/boards",
        Some(json!({ "name": "Board 2", "columns": [] }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let update = json!({
        "name": "Board 2",
        "columns": [{ "id": "col-1", "name": "Column 1", "tasks": [] }]
    });
    let (status, body) = make_request(
        app.clone(),
        "PUT",
        "/api/boards/gen-1",
        Some(update.to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["message"], "Column with ID col-1 belongs to board 1");
    assert_eq!(body["statusCode"], 400);

    let (status, _) = make_request(app.clone(), "DELETE", "/api/boards/gen-1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get_json(app.clone(), "/api/tasks/task-1").await;
    assert_eq!(status, StatusCode::OK);
    let (_, board) = get_json(app, "/api/boards/1").await;
    assert_eq!(board["columns"][0]["tasks"], json!(["task-1"]));
}

#[tokio::test]
async fn test_update_board_not_found() {
    let pool = setup_test_db().await;
    let (status, body) = make_request(
        test_app(&pool),
        "PUT",
        "/api/boards/999",
        Some(json!({ "name": "Updated Board", "columns": [] }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Board with ID 999 not found"));
}

#[tokio::test]
async fn test_delete_board_cascades() {
    let pool = setup_test_db().await;
    seed_board_with_task(&pool).await;
    let app = test_app(&pool);

    let (status, body) = make_request(app.clone(), "DELETE", "/api/boards/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = get_json(app.clone(), "/api/tasks/task-1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get_json(app.clone(), "/api/boards/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = make_request(app, "DELETE", "/api/boards/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_tasks_by_column() {
    let pool = setup_test_db().await;
    seed_board_with_task(&pool).await;
    let app = test_app(&pool);

    let (status, tasks) = get_json(app.clone(), "/api/tasks/column/col-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        tasks,
        json!([{
            "id": "task-1",
            "columnId": "col-1",
            "title": "Task 1",
            "description": "This is task 1",
            "status": "TODO",
            "deadline": "2025-01-01T00:00:00Z"
        }])
    );

    let (status, tasks) = get_json(app.clone(), "/api/tasks/column/col-2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tasks, json!([]));

    let (status, tasks) = get_json(app, "/api/tasks/column/unknown").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn test_create_task_registers_in_column() {
    let pool = setup_test_db().await;
    seed_board_with_task(&pool).await;
    let app = test_app(&pool);

    let (status, body) = make_request(
        app.clone(),
        "POST",
        "/api/tasks/column/col-2",
        Some(
            json!({
                "id": "ignored",
                "columnId": "col-1",
                "title": "Task 2",
                "description": "This is task 2",
                "status": "IN_PROGRESS",
                "deadline": "2025-01-01T00:00:00Z"
            })
            .to_string(),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let task: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(task["id"], "gen-1");
    assert_eq!(task["columnId"], "col-2");
    assert_eq!(task["status"], "IN_PROGRESS");
    assert_eq!(task["deadline"], "2025-01-01T00:00:00Z");

    let (_, board) = get_json(app.clone(), "/api/boards/1").await;
    assert_eq!(board["columns"][0]["tasks"], json!(["task-1"]));
    assert_eq!(board["columns"][1]["tasks"], json!(["gen-1"]));

    let (_, all) = get_json(app, "/api/tasks").await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_task_in_unknown_column() {
    let pool = setup_test_db().await;
    let (status, body) = make_request(
        test_app(&pool),
        "POST",
        "/api/tasks/column/nope",
        Some(json!({ "title": "Task" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Board including column with ID nope not found"));
}

#[tokio::test]
async fn test_update_task_moves_between_columns() {
    let pool = setup_test_db().await;
    seed_board_with_task(&pool).await;
    let app = test_app(&pool);

    let (status, body) = make_request(
        app.clone(),
        "PUT",
        "/api/tasks/task-1",
        Some(
            json!({
                "columnId": "col-2",
                "title": "Task 1",
                "description": "This is task 1",
                "status": "DONE",
                "deadline": null
            })
            .to_string(),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let task: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(task["columnId"], "col-2");
    assert_eq!(task["status"], "DONE");
    assert_eq!(task["deadline"], Value::Null);

    let (_, board) = get_json(app.clone(), "/api/boards/1").await;
    assert_eq!(board["columns"][0]["tasks"], json!([]));
    assert_eq!(board["columns"][1]["tasks"], json!(["task-1"]));

    let (_, stored) = get_json(app, "/api/tasks/task-1").await;
    assert_eq!(stored, task);
}

#[tokio::test]
async fn test_update_task_not_found() {
    let pool = setup_test_db().await;
    let (status, _) = make_request(
        test_app(&pool),
        "PUT",
        "/api/tasks/task-9",
        Some(json!({ "columnId": "col-1", "title": "x", "status": "TODO" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task_updates_board() {
    let pool = setup_test_db().await;
    seed_board_with_task(&pool).await;
    let app = test_app(&pool);

    let (status, _) = make_request(app.clone(), "DELETE", "/api/tasks/task-1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, board) = get_json(app.clone(), "/api/boards/1").await;
    assert_eq!(board["columns"][0]["tasks"], json!([]));
    assert_eq!(board["columns"][1]["tasks"], json!([]));
    assert_eq!(board["columns"].as_array().unwrap().len(), 2);

    let (status, _) = get_json(app, "/api/tasks/task-1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reconcile_endpoint_reports_clean_state() {
    let pool = setup_test_db().await;
    seed_board_with_task(&pool).await;

    let (status, body) =
        make_request(test_app(&pool), "POST", "/api/maintenance/reconcile", None).await;

    assert_eq!(status, StatusCode::OK);
    let report: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(report["boardsScanned"], 1);
    assert_eq!(report["tasksScanned"], 1);
    assert_eq!(report["danglingIdsRemoved"], 0);
    assert_eq!(report["boardsSaved"], 0);
}
