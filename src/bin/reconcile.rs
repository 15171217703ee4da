//! Runs the board/task repair pass against a database and prints the report.
//!
//! Usage: `kanban-reconcile [DATABASE_URL]` (falls back to `$DATABASE_URL`,
//! then `sqlite:kanban.db`).

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use kanban_board::infrastructure::{db, SqliteBoardStore, SqliteTaskStore};
use kanban_board::services::ReconcileService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:kanban.db".into());

    let pool = db::init_db(&database_url).await?;
    println!("Journal mode: {}", db::verify_wal_mode(&pool).await?);

    let service = ReconcileService::new(
        Arc::new(SqliteBoardStore::new(pool.clone())),
        Arc::new(SqliteTaskStore::new(pool)),
    );
    let report = service.run().await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
