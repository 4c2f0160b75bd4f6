//! lightbnb-db: data access for the LightBnB rental listings
//!
//! Maps user, reservation and property operations onto parameterized
//! PostgreSQL statements. The interesting part is the property listing,
//! whose optional filters are composed by a clause-list builder
//! ([`query::SelectBuilder`]); everything else is a single statement.
//!
//! Storage is reached only through the [`QueryExecutor`] trait. The
//! production binding is [`PgExecutor`] over a caller-owned `PgPool`.

pub mod config;
pub mod error;
pub mod executor;
pub mod models;
pub mod pool;
pub mod postgres;
pub mod query;
pub mod repos;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, DbConfig};
pub use error::{DbError, Result};
pub use executor::{decode, decode_all, QueryExecutor, Record};
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgExecutor;
pub use query::{Clause, SelectBuilder, SqlValue, Statement};
pub use repos::{PropertyRepo, ReservationRepo, UserRepo};
