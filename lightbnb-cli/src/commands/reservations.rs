//! Reservation commands

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::repos::DEFAULT_RESERVATION_LIMIT;
use lightbnb_db::ReservationRepo;

use super::{connect, print_json};

#[derive(Parser, Debug)]
pub struct ReservationsArgs {
    /// Guest user id
    #[arg(long)]
    guest_id: i32,

    /// Maximum reservations to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_RESERVATION_LIMIT)]
    limit: i64,
}

pub async fn run_reservations(args: ReservationsArgs, database_url: Option<String>) -> Result<()> {
    let executor = connect(database_url).await?;
    let reservations = ReservationRepo::new(&executor)
        .list_for_guest(args.guest_id, args.limit)
        .await
        .with_context(|| format!("Failed to list reservations for guest {}", args.guest_id))?;

    print_json(&reservations)
}
