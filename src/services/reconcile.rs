//! Repair pass for the board/task cross references.
//!
//! Boards and tasks are written separately, so an interrupted operation can
//! leave a column listing a task that no longer exists, a task missing from
//! its column, or a task pointing at a column that was removed. `run` scans
//! both collections and brings them back in line.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;

use crate::domain::{Board, KanbanError, Task};
use crate::infrastructure::{BoardStore, TaskStore};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileReport {
    pub boards_scanned: usize,
    pub tasks_scanned: usize,
    /// Column entries dropped: unknown task, task in another column, or a
    /// repeated entry.
    pub dangling_ids_removed: usize,
    /// Task ids appended to the column they point at.
    pub missing_ids_restored: usize,
    /// Tasks deleted because their column exists on no board.
    pub orphaned_tasks_deleted: usize,
    pub boards_saved: usize,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.dangling_ids_removed == 0
            && self.missing_ids_restored == 0
            && self.orphaned_tasks_deleted == 0
    }
}

#[derive(Clone)]
pub struct ReconcileService {
    boards: Arc<dyn BoardStore>,
    tasks: Arc<dyn TaskStore>,
}

impl ReconcileService {
    pub fn new(boards: Arc<dyn BoardStore>, tasks: Arc<dyn TaskStore>) -> Self {
        Self { boards, tasks }
    }

    pub async fn run(&self) -> Result<ReconcileReport, KanbanError> {
        let boards = self.boards.find_all().await?;
        let tasks = self.tasks.find_all().await?;

        let mut report = ReconcileReport {
            boards_scanned: boards.len(),
            tasks_scanned: tasks.len(),
            ..Default::default()
        };

        let tasks_by_id: HashMap<&str, &Task> =
            tasks.iter().map(|t| (t.id.as_str(), t)).collect();

        // First board listing a column id owns it.
        let mut column_owner: HashMap<&str, usize> = HashMap::new();
        for (index, board) in boards.iter().enumerate() {
            for column_id in board.column_ids() {
                column_owner.entry(column_id).or_insert(index);
            }
        }

        let mut placed: HashSet<String> = HashSet::new();
        let mut repaired: Vec<Board> = boards
            .iter()
            .enumerate()
            .map(|(index, board)| {
                let mut board = board.clone();
                for column in &mut board.columns {
                    let owned_here = column_owner.get(column.id.as_str()) == Some(&index);
                    let before = column.task_ids.len();
                    column.task_ids.retain(|task_id| {
                        let belongs = owned_here
                            && tasks_by_id
                                .get(task_id.as_str())
                                .is_some_and(|t| t.column_id == column.id);
                        belongs && placed.insert(task_id.clone())
                    });
                    report.dangling_ids_removed += before - column.task_ids.len();
                }
                board
            })
            .collect();

        for task in &tasks {
            if placed.contains(&task.id) {
                continue;
            }
            match column_owner.get(task.column_id.as_str()) {
                Some(&index) => {
                    repaired[index] = repaired[index].with_task_added(&task.column_id, &task.id);
                    report.missing_ids_restored += 1;
                    tracing::warn!(task_id = %task.id, column_id = %task.column_id, "Restored missing task id");
                }
                None => {
                    self.tasks.delete_by_id(&task.id).await?;
                    report.orphaned_tasks_deleted += 1;
                    tracing::warn!(task_id = %task.id, column_id = %task.column_id, "Deleted orphaned task");
                }
            }
        }

        for (original, board) in boards.iter().zip(&repaired) {
            if original != board {
                self.boards.save(board).await?;
                report.boards_saved += 1;
                tracing::info!(board_id = %board.id, "Board task lists repaired");
            }
        }

        tracing::info!(?report, "Reconciliation finished");
        Ok(report)
    }
}
