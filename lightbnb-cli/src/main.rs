//! lightbnb CLI - query and populate the LightBnB listings database
//!
//! Every command prints JSON on stdout; logs go to stderr.
//! - `user` / `add-user`: look up or register accounts
//! - `reservations`: a guest's upcoming and past stays
//! - `properties`: filtered listing search (`--dry-run` shows the SQL)
//! - `add-property`: create a listing from a JSON file

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

mod commands;
mod config;
mod tracing_setup;

use commands::{AddPropertyArgs, AddUserArgs, PropertiesArgs, ReservationsArgs, UserArgs};

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query and populate the LightBnB listings database"
)]
struct Cli {
    /// Enable debug logging (SQL text and parameter counts)
    #[arg(long, global = true)]
    debug: bool,

    /// PostgreSQL connection URL
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a user by email or id
    User(UserArgs),
    /// Register a new user
    AddUser(AddUserArgs),
    /// List a guest's reservations, earliest first
    Reservations(ReservationsArgs),
    /// Search property listings, cheapest first
    Properties(PropertiesArgs),
    /// Create a property listing from a JSON file
    AddProperty(AddPropertyArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so DATABASE_URL from .env feeds the clap env fallback
    let env_files = config::load_dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    for path in &env_files {
        debug!(path = %path.display(), "loaded env file");
    }

    let database_url = cli.database_url;
    match cli.command {
        Commands::User(args) => commands::run_user(args, database_url).await,
        Commands::AddUser(args) => commands::run_add_user(args, database_url).await,
        Commands::Reservations(args) => commands::run_reservations(args, database_url).await,
        Commands::Properties(args) => commands::run_properties(args, database_url).await,
        Commands::AddProperty(args) => commands::run_add_property(args, database_url).await,
    }
}
