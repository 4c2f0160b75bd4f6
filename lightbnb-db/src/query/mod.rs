//! Statement construction
//!
//! - `SqlValue`: a bound parameter
//! - `Statement`: SQL text with `$n` placeholders and its parameters
//! - `SelectBuilder`/`Clause`: clause-list builder for filtered list queries
//! - `build_property_query`: the property listing filter composition

pub mod builder;
pub mod property;
pub mod statement;
pub mod value;

pub use builder::{escape_like, Clause, SelectBuilder};
pub use property::{build_property_page_query, build_property_query, to_minor_units};
pub use statement::Statement;
pub use value::SqlValue;
