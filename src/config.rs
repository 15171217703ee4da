use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub frontend_dir: String,
    pub cors_origin: String,
    pub reconcile_on_startup: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(21547),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:kanban.db".into()),
            frontend_dir: std::env::var("FRONTEND_DIR")
                .unwrap_or_else(|_| "../frontend/dist".into()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".into()),
            reconcile_on_startup: reconcile_flag(
                std::env::var("RECONCILE_ON_STARTUP").ok().as_deref(),
            ),
        })
    }
}

/// An unparsable value only disables the startup pass; the rest of the
/// configuration is unaffected.
fn reconcile_flag(raw: Option<&str>) -> bool {
    match raw.map(parse_flag) {
        Some(Ok(flag)) => flag,
        Some(Err(e)) => {
            tracing::warn!("Ignoring RECONCILE_ON_STARTUP: {}", e);
            false
        }
        None => false,
    }
}

fn parse_flag(value: &str) -> Result<bool, anyhow::Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow::anyhow!("Invalid boolean flag: {}", other)),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 21547,
            database_url: "sqlite:kanban.db".into(),
            frontend_dir: "../frontend/dist".into(),
            cors_origin: "http://localhost:5173,http://127.0.0.1:5173".into(),
            reconcile_on_startup: false,
        }
    }
}
