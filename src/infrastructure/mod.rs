pub mod db;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use memory::{MemoryBoardStore, MemoryTaskStore};
pub use sqlite::{SqliteBoardStore, SqliteTaskStore};
pub use store::{BoardStore, StoreResult, TaskStore};
