use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum KanbanError {
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("{0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl KanbanError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        KanbanError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, KanbanError::NotFound { .. })
    }
}

impl IntoResponse for KanbanError {
    fn into_response(self) -> Response {
        let status = match &self {
            KanbanError::NotFound { .. } => StatusCode::NOT_FOUND,
            KanbanError::BadRequest(_) => StatusCode::BAD_REQUEST,
            KanbanError::Internal(_)
            | KanbanError::Database(_)
            | KanbanError::Serialization(_) => {
                tracing::error!("Request failed: {:?}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({
            "message": self.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "statusCode": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
