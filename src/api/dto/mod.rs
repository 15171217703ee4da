pub mod boards;
pub mod tasks;

pub use boards::{CreateBoardRequest, UpdateBoardRequest};
pub use tasks::{CreateTaskRequest, UpdateTaskRequest};
