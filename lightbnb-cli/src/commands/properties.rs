//! Property commands: properties, add-property

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::models::{FilterOptions, NewProperty, Pagination, PropertySearchParams};
use lightbnb_db::query::{build_property_page_query, build_property_query};
use lightbnb_db::repos::DEFAULT_PROPERTY_LIMIT;
use lightbnb_db::PropertyRepo;

use super::{connect, print_json};

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    /// Case-insensitive part of the city name
    #[arg(long)]
    city: Option<String>,

    /// Only properties owned by this user id
    #[arg(long)]
    owner_id: Option<String>,

    /// Minimum price per night in dollars
    #[arg(long)]
    min_price: Option<String>,

    /// Maximum price per night in dollars
    #[arg(long)]
    max_price: Option<String>,

    /// Minimum average rating (0-5)
    #[arg(long)]
    min_rating: Option<String>,

    /// Maximum properties to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_PROPERTY_LIMIT)]
    limit: i64,

    /// Return this page (1-indexed) of --limit results instead
    #[arg(long)]
    page: Option<u32>,

    /// Print the SQL and parameters without connecting
    #[arg(long)]
    dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct AddPropertyArgs {
    /// JSON file with the property fields (cost_per_night in cents)
    #[arg(long)]
    file: PathBuf,
}

pub async fn run_properties(args: PropertiesArgs, database_url: Option<String>) -> Result<()> {
    let filter = FilterOptions::try_from(PropertySearchParams {
        city: args.city,
        owner_id: args.owner_id,
        minimum_price_per_night: args.min_price,
        maximum_price_per_night: args.max_price,
        minimum_rating: args.min_rating,
    })?;
    let page = args
        .page
        .map(|page| Pagination::new(page, u32::try_from(args.limit).unwrap_or(u32::MAX)));

    if args.dry_run {
        let stmt = match page {
            Some(page) => build_property_page_query(&filter, page),
            None => build_property_query(&filter, args.limit),
        };
        print!("{stmt}");
        return Ok(());
    }

    let executor = connect(database_url).await?;
    let repo = PropertyRepo::new(&executor);
    let listings = match page {
        Some(page) => repo.list_page(&filter, page).await,
        None => repo.list(&filter, args.limit).await,
    }
    .context("Failed to list properties")?;

    print_json(&listings)
}

pub async fn run_add_property(args: AddPropertyArgs, database_url: Option<String>) -> Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let property: NewProperty = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid property JSON in {}", args.file.display()))?;
    property.validate()?;

    let executor = connect(database_url).await?;
    let created = PropertyRepo::new(&executor)
        .create(&property)
        .await
        .context("Failed to create property")?;

    print_json(&created)
}
