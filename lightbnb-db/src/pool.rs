//! Connection pool construction
//!
//! The pool is created here but owned by the caller; repositories only see
//! it through a [`PgExecutor`](crate::PgExecutor).

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DbConfig;
use crate::error::Result;

/// Create a PostgreSQL connection pool from configuration.
///
/// # Errors
///
/// Returns [`DbError::Connectivity`](crate::DbError::Connectivity) if the
/// server cannot be reached.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env()?).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool> {
    create_pool_with_options(&config.database_url, config.max_connections).await
}

/// Create a PostgreSQL connection pool with an explicit size.
pub async fn create_pool_with_options(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    info!(max_connections, "connected to database");
    Ok(pool)
}
