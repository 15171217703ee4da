use std::sync::Arc;

use crate::api::dto::{CreateTaskRequest, UpdateTaskRequest};
use crate::domain::{Board, KanbanError, Task};
use crate::infrastructure::{BoardStore, TaskStore};
use crate::services::IdGenerator;

const TASK: &str = "Task";
const BOARD_WITH_COLUMN: &str = "Board including column";
const COLUMN: &str = "Column";

/// Task lifecycle. Every write that changes which column a task lives in also
/// rewrites the owning board so the column's `task_ids` stay in step.
///
/// The board and the task are separate records and are written one after the
/// other. A crash in between leaves a dangling or missing id that
/// [`ReconcileService`](crate::services::ReconcileService) repairs.
#[derive(Clone)]
pub struct TaskService {
    boards: Arc<dyn BoardStore>,
    tasks: Arc<dyn TaskStore>,
    ids: Arc<dyn IdGenerator>,
}

impl TaskService {
    pub fn new(
        boards: Arc<dyn BoardStore>,
        tasks: Arc<dyn TaskStore>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { boards, tasks, ids }
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, KanbanError> {
        self.tasks.find_all().await
    }

    /// Unknown and empty columns both yield an empty list.
    pub async fn list_tasks_in_column(&self, column_id: &str) -> Result<Vec<Task>, KanbanError> {
        self.tasks.find_by_column_id(column_id).await
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, KanbanError> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or_else(|| KanbanError::not_found(TASK, id))
    }

    pub async fn create_task(
        &self,
        column_id: &str,
        req: CreateTaskRequest,
    ) -> Result<Task, KanbanError> {
        let id = self.ids.generate();
        let board = self.board_with_column(column_id).await?;

        self.boards
            .save(&board.with_task_added(column_id, &id))
            .await?;

        let task = self
            .tasks
            .save(&Task {
                id,
                column_id: column_id.to_string(),
                title: req.title,
                description: req.description,
                status: req.status,
                deadline: req.deadline,
            })
            .await?;

        tracing::info!(task_id = %task.id, column_id, board_id = %board.id, "Task created");
        Ok(task)
    }

    /// Applies every field of `req`. When the column changes, the id moves
    /// between the two columns of the owning board in a single board write.
    /// Both columns must be on the same board.
    pub async fn update_task(&self, id: &str, req: UpdateTaskRequest) -> Result<Task, KanbanError> {
        let existing = self.get_task(id).await?;

        if existing.column_id != req.column_id {
            let board = self.board_with_column(&existing.column_id).await?;
            if !board.has_column(&req.column_id) {
                return Err(KanbanError::not_found(COLUMN, req.column_id));
            }

            let moved = board
                .with_task_removed(&existing.column_id, id)
                .with_task_added(&req.column_id, id);
            self.boards.save(&moved).await?;

            tracing::info!(
                task_id = id,
                from = %existing.column_id,
                to = %req.column_id,
                board_id = %board.id,
                "Task moved"
            );
        }

        let task = self
            .tasks
            .save(&Task {
                id: existing.id,
                column_id: req.column_id,
                title: req.title,
                description: req.description,
                status: req.status,
                deadline: req.deadline,
            })
            .await?;

        Ok(task)
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), KanbanError> {
        let task = self.get_task(id).await?;
        let board = self.board_with_column(&task.column_id).await?;

        self.boards
            .save(&board.with_task_removed(&task.column_id, id))
            .await?;
        self.tasks.delete_by_id(id).await?;

        tracing::info!(task_id = id, board_id = %board.id, "Task deleted");
        Ok(())
    }

    async fn board_with_column(&self, column_id: &str) -> Result<Board, KanbanError> {
        self.boards
            .find_by_column_id(column_id)
            .await?
            .ok_or_else(|| KanbanError::not_found(BOARD_WITH_COLUMN, column_id))
    }
}
