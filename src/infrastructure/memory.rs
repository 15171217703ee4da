//! In-memory stores for tests and embedding.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Board, Task};
use crate::infrastructure::store::{BoardStore, StoreResult, TaskStore};

/// Insertion-ordered board collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryBoardStore {
    boards: Arc<RwLock<Vec<Board>>>,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    async fn find_all(&self) -> StoreResult<Vec<Board>> {
        Ok(self.boards.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Board>> {
        let boards = self.boards.read().await;
        Ok(boards.iter().find(|b| b.id == id).cloned())
    }

    async fn save(&self, board: &Board) -> StoreResult<Board> {
        let mut boards = self.boards.write().await;
        match boards.iter_mut().find(|b| b.id == board.id) {
            Some(existing) => *existing = board.clone(),
            None => boards.push(board.clone()),
        }
        Ok(board.clone())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        self.boards.write().await.retain(|b| b.id != id);
        Ok(())
    }

    async fn find_by_column_id(&self, column_id: &str) -> StoreResult<Option<Board>> {
        let boards = self.boards.read().await;
        Ok(boards.iter().find(|b| b.has_column(column_id)).cloned())
    }
}

/// Insertion-ordered task collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn find_all(&self) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn save(&self, task: &Task) -> StoreResult<Task> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task.clone(),
            None => tasks.push(task.clone()),
        }
        Ok(task.clone())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        self.tasks.write().await.retain(|t| t.id != id);
        Ok(())
    }

    async fn find_by_column_id(&self, column_id: &str) -> StoreResult<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .cloned()
            .collect())
    }

    async fn delete_all_by_column_id(&self, column_id: &str) -> StoreResult<u64> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.column_id != column_id);
        Ok((before - tasks.len()) as u64)
    }
}
