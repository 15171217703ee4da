use std::collections::HashSet;
use std::sync::Arc;

use crate::api::dto::{CreateBoardRequest, UpdateBoardRequest};
use crate::domain::{Board, Column, ColumnInput, KanbanError};
use crate::infrastructure::{BoardStore, TaskStore};
use crate::services::IdGenerator;

const BOARD: &str = "Board";

/// Board lifecycle. Removing a column, or the whole board, deletes the tasks
/// that live in it.
#[derive(Clone)]
pub struct BoardService {
    boards: Arc<dyn BoardStore>,
    tasks: Arc<dyn TaskStore>,
    ids: Arc<dyn IdGenerator>,
}

impl BoardService {
    pub fn new(
        boards: Arc<dyn BoardStore>,
        tasks: Arc<dyn TaskStore>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { boards, tasks, ids }
    }

    pub async fn list_boards(&self) -> Result<Vec<Board>, KanbanError> {
        self.boards.find_all().await
    }

    pub async fn get_board(&self, id: &str) -> Result<Board, KanbanError> {
        self.boards
            .find_by_id(id)
            .await?
            .ok_or_else(|| KanbanError::not_found(BOARD, id))
    }

    pub async fn create_board(&self, req: CreateBoardRequest) -> Result<Board, KanbanError> {
        let columns = self.resolve_columns(None, req.columns).await?;

        let board = Board {
            id: self.ids.generate(),
            name: req.name,
            columns,
        };

        let board = self.boards.save(&board).await?;
        tracing::info!(board_id = %board.id, "Board created");
        Ok(board)
    }

    /// Replaces the name and column list. Columns that disappear take their
    /// tasks with them; new columns get fresh ids. Existing columns keep the
    /// task list already stored for them. The payload is validated before
    /// anything is written.
    pub async fn update_board(
        &self,
        id: &str,
        req: UpdateBoardRequest,
    ) -> Result<Board, KanbanError> {
        let existing = self.get_board(id).await?;

        let columns = self.resolve_columns(Some(&existing), req.columns).await?;

        let removed: Vec<&str> = existing
            .column_ids()
            .filter(|column_id| !columns.iter().any(|c| c.id == *column_id))
            .collect();

        // Stops at the first failure; the board record is still unchanged then.
        for column_id in removed {
            let deleted = self.tasks.delete_all_by_column_id(column_id).await?;
            tracing::debug!(
                board_id = %existing.id,
                column_id,
                deleted,
                "Deleted tasks of removed column"
            );
        }

        let board = Board {
            id: existing.id.clone(),
            name: req.name,
            columns,
        };

        let board = self.boards.save(&board).await?;
        tracing::info!(board_id = %board.id, "Board updated");
        Ok(board)
    }

    pub async fn delete_board(&self, id: &str) -> Result<(), KanbanError> {
        let board = self.get_board(id).await?;

        for column_id in board.column_ids() {
            let deleted = self.tasks.delete_all_by_column_id(column_id).await?;
            tracing::debug!(board_id = %board.id, column_id, deleted, "Deleted column tasks");
        }

        self.boards.delete_by_id(&board.id).await?;
        tracing::info!(board_id = %board.id, "Board deleted");
        Ok(())
    }

    /// Turns column payloads into columns for `existing` (or for a board being
    /// created). Task lists come from the stored board only: a column id the
    /// board does not have yet starts empty, since no task can point at it.
    /// Ids repeated in the payload or owned by another board are rejected.
    async fn resolve_columns(
        &self,
        existing: Option<&Board>,
        inputs: Vec<ColumnInput>,
    ) -> Result<Vec<Column>, KanbanError> {
        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(inputs.len());

        for input in inputs {
            let column = match input {
                ColumnInput::New { name } => Column::new(self.ids.generate(), name),
                ColumnInput::Existing { id, name, .. } => {
                    match existing.and_then(|board| board.column(&id)) {
                        Some(stored) => Column {
                            id,
                            name,
                            task_ids: stored.task_ids.clone(),
                        },
                        None => {
                            if let Some(owner) = self.boards.find_by_column_id(&id).await? {
                                return Err(KanbanError::BadRequest(format!(
                                    "Column with ID {} belongs to board {}",
                                    id, owner.id
                                )));
                            }
                            Column::new(id, name)
                        }
                    }
                }
            };

            if !seen.insert(column.id.clone()) {
                return Err(KanbanError::BadRequest(format!(
                    "Duplicate column ID {}",
                    column.id
                )));
            }
            columns.push(column);
        }

        Ok(columns)
    }
}
