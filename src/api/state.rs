use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::infrastructure::{BoardStore, SqliteBoardStore, SqliteTaskStore, TaskStore};
use crate::services::{
    BoardService, IdGenerator, ReconcileService, TaskService, UuidIdGenerator,
};

#[derive(Clone)]
pub struct AppState {
    pub boards: BoardService,
    pub tasks: TaskService,
    pub reconcile: ReconcileService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        board_store: Arc<dyn BoardStore>,
        task_store: Arc<dyn TaskStore>,
        ids: Arc<dyn IdGenerator>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            boards: BoardService::new(board_store.clone(), task_store.clone(), ids.clone()),
            tasks: TaskService::new(board_store.clone(), task_store.clone(), ids),
            reconcile: ReconcileService::new(board_store, task_store),
            config,
        }
    }

    /// SQLite stores and random UUIDs.
    pub fn from_pool(pool: SqlitePool, config: Arc<Config>) -> Self {
        Self::new(
            Arc::new(SqliteBoardStore::new(pool.clone())),
            Arc::new(SqliteTaskStore::new(pool)),
            Arc::new(UuidIdGenerator),
            config,
        )
    }
}
