//! User commands: user, add-user

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use lightbnb_db::models::NewUser;
use lightbnb_db::UserRepo;
use tracing::info;

use super::{connect, print_json};

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("key").required(true).args(["email", "id"])))]
pub struct UserArgs {
    /// Look up by email address
    #[arg(long)]
    email: Option<String>,

    /// Look up by user id
    #[arg(long)]
    id: Option<i32>,
}

#[derive(Parser, Debug)]
pub struct AddUserArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Email address (must be unique)
    #[arg(long)]
    email: String,

    /// Password hash to store
    #[arg(long)]
    password: String,
}

/// Print the user as JSON, or `null` when there is no such user.
pub async fn run_user(args: UserArgs, database_url: Option<String>) -> Result<()> {
    let executor = connect(database_url).await?;
    let users = UserRepo::new(&executor);

    let user = match (args.email, args.id) {
        (Some(email), _) => users.lookup_by_email(&email).await,
        (None, Some(id)) => users.lookup_by_id(id).await,
        (None, None) => unreachable!("clap requires --email or --id"),
    }
    .context("User lookup failed")?;

    if user.is_none() {
        info!("no such user");
    }
    print_json(&user)
}

pub async fn run_add_user(args: AddUserArgs, database_url: Option<String>) -> Result<()> {
    let new_user = NewUser::new(&args.name, &args.email, &args.password)?;

    let executor = connect(database_url).await?;
    let user = UserRepo::new(&executor)
        .create(&new_user)
        .await
        .context("Failed to create user")?;

    print_json(&user)
}
