//! Repository implementations for the caller-facing operations
//!
//! Each repository follows these patterns:
//! - Borrows a [`QueryExecutor`](crate::QueryExecutor); no hidden globals
//! - One statement per operation
//! - Lookups by key return `Option`; a miss is not an error

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::{PropertyRepo, DEFAULT_PROPERTY_LIMIT};
pub use reservations::{ReservationRepo, DEFAULT_RESERVATION_LIMIT};
pub use users::UserRepo;
