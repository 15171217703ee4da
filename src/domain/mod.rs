pub mod board;
pub mod error;
pub mod task;

pub use board::{Board, Column, ColumnInput};
pub use error::KanbanError;
pub use task::{Task, TaskStatus};
