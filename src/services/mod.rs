pub mod board_service;
pub mod id_generator;
pub mod reconcile;
pub mod task_service;

pub use board_service::BoardService;
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use reconcile::{ReconcileReport, ReconcileService};
pub use task_service::TaskService;
