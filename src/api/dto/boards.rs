use serde::Deserialize;

use crate::domain::ColumnInput;

/// Any `id` in the body is ignored; boards always get a generated id.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBoardRequest {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBoardRequest {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnInput>,
}

impl CreateBoardRequest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }
}
