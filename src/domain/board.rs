use serde::{Deserialize, Serialize};

/// A board document. Columns are embedded and stored with the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// A column inside a board. `task_ids` caches the ids of every task whose
/// `column_id` points here, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub name: String,
    #[serde(rename = "tasks", default)]
    pub task_ids: Vec<String>,
}

/// Column payload accepted when creating or updating a board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ColumnPayload")]
pub enum ColumnInput {
    New {
        name: String,
    },
    Existing {
        id: String,
        name: String,
        task_ids: Vec<String>,
    },
}

/// Wire shape of a column in board bodies: `{ "id"?, "name", "tasks"? }`.
#[derive(Debug, Deserialize)]
struct ColumnPayload {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    tasks: Vec<String>,
}

impl From<ColumnPayload> for ColumnInput {
    fn from(payload: ColumnPayload) -> Self {
        ColumnInput::from_parts(payload.id, payload.name, payload.tasks)
    }
}

impl Board {
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn has_column(&self, column_id: &str) -> bool {
        self.column(column_id).is_some()
    }

    pub fn column_ids(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.id.as_str())
    }

    /// Returns a copy of this board with `f` applied to the column `column_id`.
    /// Other columns are carried over unchanged. A missing column leaves the
    /// board as is.
    pub fn with_column_updated<F>(&self, column_id: &str, f: F) -> Board
    where
        F: FnOnce(&Column) -> Column,
    {
        let mut columns = self.columns.clone();
        if let Some(pos) = self.columns.iter().position(|c| c.id == column_id) {
            columns[pos] = f(&self.columns[pos]);
        }

        Board {
            id: self.id.clone(),
            name: self.name.clone(),
            columns,
        }
    }

    pub fn with_task_added(&self, column_id: &str, task_id: &str) -> Board {
        self.with_column_updated(column_id, |column| column.with_task_added(task_id))
    }

    pub fn with_task_removed(&self, column_id: &str, task_id: &str) -> Board {
        self.with_column_updated(column_id, |column| column.with_task_removed(task_id))
    }
}

impl Column {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            task_ids: Vec::new(),
        }
    }

    pub fn contains_task(&self, task_id: &str) -> bool {
        self.task_ids.iter().any(|id| id == task_id)
    }

    pub fn with_task_added(&self, task_id: &str) -> Column {
        let mut task_ids = self.task_ids.clone();
        task_ids.push(task_id.to_string());
        Column {
            id: self.id.clone(),
            name: self.name.clone(),
            task_ids,
        }
    }

    pub fn with_task_removed(&self, task_id: &str) -> Column {
        Column {
            id: self.id.clone(),
            name: self.name.clone(),
            task_ids: self
                .task_ids
                .iter()
                .filter(|id| id.as_str() != task_id)
                .cloned()
                .collect(),
        }
    }
}

impl ColumnInput {
    /// Wire payloads mark a new column by leaving the id out or empty.
    pub fn from_parts(id: Option<String>, name: String, task_ids: Vec<String>) -> Self {
        match id {
            Some(id) if !id.is_empty() => ColumnInput::Existing { id, name, task_ids },
            _ => ColumnInput::New { name },
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            ColumnInput::New { .. } => None,
            ColumnInput::Existing { id, .. } => Some(id),
        }
    }
}
