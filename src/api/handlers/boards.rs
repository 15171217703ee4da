use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{CreateBoardRequest, UpdateBoardRequest};
use crate::api::state::AppState;
use crate::domain::{Board, KanbanError};

pub async fn list_boards(State(state): State<AppState>) -> Result<Json<Vec<Board>>, KanbanError> {
    let boards = state.boards.list_boards().await?;
    Ok(Json(boards))
}

pub async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Board>, KanbanError> {
    let board = state.boards.get_board(&id).await?;
    Ok(Json(board))
}

pub async fn create_board(
    State(state): State<AppState>,
    Json(req): Json<CreateBoardRequest>,
) -> Result<(StatusCode, Json<Board>), KanbanError> {
    let board = state.boards.create_board(req).await?;
    Ok((StatusCode::CREATED, Json(board)))
}

pub async fn update_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateBoardRequest>,
) -> Result<Json<Board>, KanbanError> {
    let board = state.boards.update_board(&id, req).await?;
    Ok(Json(board))
}

pub async fn delete_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, KanbanError> {
    state.boards.delete_board(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
