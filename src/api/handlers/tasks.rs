use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{CreateTaskRequest, UpdateTaskRequest};
use crate::api::state::AppState;
use crate::domain::{KanbanError, Task};

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, KanbanError> {
    let tasks = state.tasks.list_tasks().await?;
    Ok(Json(tasks))
}

pub async fn list_tasks_in_column(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
) -> Result<Json<Vec<Task>>, KanbanError> {
    let tasks = state.tasks.list_tasks_in_column(&column_id).await?;
    Ok(Json(tasks))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, KanbanError> {
    let task = state.tasks.get_task(&id).await?;
    Ok(Json(task))
}

pub async fn create_task(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), KanbanError> {
    let task = state.tasks.create_task(&column_id, req).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, KanbanError> {
    let task = state.tasks.update_task(&id, req).await?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, KanbanError> {
    state.tasks.delete_task(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
