//! Domain models
//!
//! Row types deserialize from executor records. Input types (`NewUser`,
//! `NewProperty`, `PropertySearchParams`) validate at construction and return
//! `ValidationError` on bad input, never panic.

pub mod filter;
pub mod pagination;
pub mod property;
pub mod reservation;
pub mod user;
pub mod validation;

pub use filter::{FilterOptions, PropertySearchParams};
pub use pagination::{Pagination, PaginationParams};
pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::Reservation;
pub use user::{NewUser, User};
pub use validation::ValidationError;
