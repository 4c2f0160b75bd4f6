//! CLI configuration loading
//!
//! Priority order (highest to lowest):
//! 1. `--database-url` flag
//! 2. Environment variables already set
//! 3. Current directory .env
//! 4. ~/.lightbnb/.env

use std::path::PathBuf;

use anyhow::{Context, Result};
use lightbnb_db::config::DATABASE_URL_VAR;
use lightbnb_db::DbConfig;

/// Load .env files, returning the ones that were found.
///
/// dotenvy never overwrites variables that are already set, so loading the
/// current directory first gives it priority over the home directory file.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

/// The lightbnb config directory (~/.lightbnb)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lightbnb"))
}

/// Resolve database settings, letting an explicit URL win over the environment.
pub fn db_config(database_url: Option<String>) -> Result<DbConfig> {
    DbConfig::from_lookup(|var| match (&database_url, var) {
        (Some(url), DATABASE_URL_VAR) => Some(url.clone()),
        _ => std::env::var(var).ok(),
    })
    .context("Database is not configured (set DATABASE_URL or pass --database-url)")
}
