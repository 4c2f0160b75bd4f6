//! Subcommand implementations

pub mod properties;
pub mod reservations;
pub mod users;

use anyhow::{Context, Result};
use lightbnb_db::{create_pool, PgExecutor};
use serde::Serialize;

pub use properties::{run_add_property, run_properties, AddPropertyArgs, PropertiesArgs};
pub use reservations::{run_reservations, ReservationsArgs};
pub use users::{run_add_user, run_user, AddUserArgs, UserArgs};

/// Connect using the resolved database settings.
pub async fn connect(database_url: Option<String>) -> Result<PgExecutor> {
    let config = crate::config::db_config(database_url)?;
    let pool = create_pool(&config)
        .await
        .context("Failed to connect to database")?;
    Ok(PgExecutor::new(pool))
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
