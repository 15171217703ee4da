//! SQLite-backed stores. Boards are kept as documents: the embedded columns
//! (with their task id lists) are one JSON text column. Tasks are flat rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::domain::{Board, Column, KanbanError, Task, TaskStatus};
use crate::infrastructure::store::{BoardStore, StoreResult, TaskStore};

#[derive(Debug, FromRow)]
struct BoardRow {
    id: String,
    name: String,
    columns: String,
}

impl TryFrom<BoardRow> for Board {
    type Error = KanbanError;

    fn try_from(row: BoardRow) -> Result<Self, Self::Error> {
        let columns: Vec<Column> = serde_json::from_str(&row.columns)?;
        Ok(Board {
            id: row.id,
            name: row.name,
            columns,
        })
    }
}

#[derive(Debug, FromRow)]
struct TaskRow {
    id: String,
    column_id: String,
    title: String,
    description: String,
    status: String,
    deadline: Option<String>,
}

impl TryFrom<TaskRow> for Task {
    type Error = KanbanError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<TaskStatus>()
            .map_err(KanbanError::Internal)?;
        let deadline = row
            .deadline
            .as_deref()
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw)
                    .map(|d| d.with_timezone(&Utc))
                    .map_err(|e| {
                        KanbanError::Internal(format!(
                            "Invalid deadline {} on task {}: {}",
                            raw, row.id, e
                        ))
                    })
            })
            .transpose()?;

        Ok(Task {
            id: row.id,
            column_id: row.column_id,
            title: row.title,
            description: row.description,
            status,
            deadline,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SqliteBoardStore {
    pool: SqlitePool,
}

impl SqliteBoardStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardStore for SqliteBoardStore {
    async fn find_all(&self) -> StoreResult<Vec<Board>> {
        let rows: Vec<BoardRow> =
            sqlx::query_as("SELECT id, name, columns FROM boards ORDER BY rowid ASC")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(Board::try_from).collect()
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Board>> {
        let row: Option<BoardRow> =
            sqlx::query_as("SELECT id, name, columns FROM boards WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(Board::try_from).transpose()
    }

    async fn save(&self, board: &Board) -> StoreResult<Board> {
        let columns = serde_json::to_string(&board.columns)?;

        sqlx::query(
            "INSERT INTO boards (id, name, columns) VALUES (?, ?, ?) ON CONFLICT(id) DO UPDATE SET name = excluded.name, columns = excluded.columns",
        )
        .bind(&board.id)
        .bind(&board.name)
        .bind(&columns)
        .execute(&self.pool)
        .await?;

        Ok(board.clone())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_column_id(&self, column_id: &str) -> StoreResult<Option<Board>> {
        let row: Option<BoardRow> = sqlx::query_as(
            r#"
            SELECT b.id, b.name, b.columns
            FROM boards b
            WHERE EXISTS (
                SELECT 1 FROM json_each(b.columns) c
                WHERE json_extract(c.value, '$.id') = ?
            )
            ORDER BY b.rowid ASC
            LIMIT 1
            "#,
        )
        .bind(column_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Board::try_from).transpose()
    }
}

#[derive(Debug, Clone)]
pub struct SqliteTaskStore {
    pool: SqlitePool,
}

impl SqliteTaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn find_all(&self) -> StoreResult<Vec<Task>> {
        let rows: Vec<TaskRow> = sqlx::query_as("SELECT * FROM tasks ORDER BY rowid ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Task::try_from).collect()
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Task>> {
        let row: Option<TaskRow> = sqlx::query_as("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Task::try_from).transpose()
    }

    async fn save(&self, task: &Task) -> StoreResult<Task> {
        let deadline = task.deadline.map(|d| d.to_rfc3339());

        sqlx::query(
            "INSERT INTO tasks (id, column_id, title, description, status, deadline) VALUES (?, ?, ?, ?, ?, ?) ON CONFLICT(id) DO UPDATE SET column_id = excluded.column_id, title = excluded.title, description = excluded.description, status = excluded.status, deadline = excluded.deadline",
        )
        .bind(&task.id)
        .bind(&task.column_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(&deadline)
        .execute(&self.pool)
        .await?;

        Ok(task.clone())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_column_id(&self, column_id: &str) -> StoreResult<Vec<Task>> {
        let rows: Vec<TaskRow> =
            sqlx::query_as("SELECT * FROM tasks WHERE column_id = ? ORDER BY rowid ASC")
                .bind(column_id)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(Task::try_from).collect()
    }

    async fn delete_all_by_column_id(&self, column_id: &str) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM tasks WHERE column_id = ?")
            .bind(column_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
