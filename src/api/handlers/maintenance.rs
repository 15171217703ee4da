use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::domain::KanbanError;
use crate::services::ReconcileReport;

pub async fn reconcile(
    State(state): State<AppState>,
) -> Result<Json<ReconcileReport>, KanbanError> {
    let report = state.reconcile.run().await?;
    Ok(Json(report))
}
