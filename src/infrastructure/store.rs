//! Persistence contracts for boards and tasks.
//!
//! Boards and tasks live in independent collections. Nothing at this layer
//! keeps a column's task list in step with the tasks pointing at it; the
//! services do that.

use async_trait::async_trait;

use crate::domain::{Board, KanbanError, Task};

pub type StoreResult<T> = Result<T, KanbanError>;

#[async_trait]
pub trait BoardStore: Send + Sync {
    /// All boards in insertion order.
    async fn find_all(&self) -> StoreResult<Vec<Board>>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Board>>;

    /// Inserts or replaces the board with the same id.
    async fn save(&self, board: &Board) -> StoreResult<Board>;

    /// Removing an unknown id is not an error.
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;

    /// The board whose columns include `column_id`.
    async fn find_by_column_id(&self, column_id: &str) -> StoreResult<Option<Board>>;
}

#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Task>>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Task>>;

    /// Inserts or replaces the task with the same id.
    async fn save(&self, task: &Task) -> StoreResult<Task>;

    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;

    async fn find_by_column_id(&self, column_id: &str) -> StoreResult<Vec<Task>>;

    /// Returns how many tasks were removed.
    async fn delete_all_by_column_id(&self, column_id: &str) -> StoreResult<u64>;
}
