//! Application configuration.
//!
//! Values come from `config.toml` first, then the environment (via a
//! `.env` file if present), then built-in defaults.

use serde::Deserialize;
use std::path::PathBuf;

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
    router_lab: Option<RouterLabConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RouterLabConfig {
    api_url: Option<String>,
}

fn load_config() -> Option<AppConfig> {
    let contents = std::fs::read_to_string("config.toml").ok()?;
    match toml::from_str::<AppConfig>(&contents) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Ignoring malformed config.toml: {}", e);
            None
        }
    }
}

/// Load database path with priority: config.toml > .env > default
pub fn load_database_path() -> PathBuf {
    let _ = dotenvy::dotenv();

    if let Some(path) = load_config().and_then(|c| c.database).and_then(|db| db.path) {
        tracing::info!("Using database from config.toml: {}", path);
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("DATABASE_PATH") {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    let default = PathBuf::from("data/net_tutor.db");
    tracing::info!("Using default database path: {}", default.display());
    default
}

/// Base URL of the router-management API the lab page tries before falling
/// back to canned data. Priority: config.toml > env > default.
pub fn router_api_url() -> String {
    if let Some(url) = load_config().and_then(|c| c.router_lab).and_then(|r| r.api_url) {
        return url;
    }

    std::env::var("ROUTER_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// IP the lab page presents as the managed router.
pub const LAB_ROUTER_IP: &str = "192.168.1.1";

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}
