//! Property listing filter composition
//!
//! Filters are applied in a fixed order (city, owner, price range, rating) so
//! that the same options always produce the same statement. Rating filters the
//! review aggregate and therefore lands in HAVING, after the GROUP BY.

use super::{Clause, SelectBuilder, Statement};
use crate::models::{FilterOptions, Pagination};

/// Properties joined with their reviews; one row per review until grouped.
const PROPERTY_LISTING_BASE: &str = r#"
SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating
FROM properties
JOIN property_reviews ON properties.id = property_reviews.property_id
"#;

/// Convert a major-unit price (dollars) to minor units (cents).
///
/// `price` must be finite; [`FilterOptions`] built from
/// `PropertySearchParams` always is.
pub fn to_minor_units(price: f64) -> i64 {
    debug_assert!(price.is_finite(), "price must be finite, got {price}");
    (price * 100.0).round() as i64
}

/// Build the filtered property listing with `limit` as the last parameter.
pub fn build_property_query(filter: &FilterOptions, limit: i64) -> Statement {
    let mut query = property_listing(filter);
    query.limit(limit);
    query.build()
}

/// Same listing as [`build_property_query`], restricted to one page.
pub fn build_property_page_query(filter: &FilterOptions, page: Pagination) -> Statement {
    let mut query = property_listing(filter);
    query.limit(i64::from(page.limit())).offset(page.offset() as i64);
    query.build()
}

fn property_listing(filter: &FilterOptions) -> SelectBuilder {
    let mut query = SelectBuilder::new(PROPERTY_LISTING_BASE);

    if let Some(city) = &filter.city {
        query.filter(Clause::contains_ignore_case("properties.city", city));
    }

    if let Some(owner_id) = filter.owner_id {
        query.filter(Clause::eq("properties.owner_id", owner_id));
    }

    let min = filter.minimum_price_per_night.map(to_minor_units);
    let max = filter.maximum_price_per_night.map(to_minor_units);
    match (min, max) {
        (Some(min), Some(max)) => {
            query.filter(Clause::between("properties.cost_per_night", min, max));
        }
        (Some(min), None) => {
            query.filter(Clause::gte("properties.cost_per_night", min));
        }
        (None, Some(max)) => {
            query.filter(Clause::lte("properties.cost_per_night", max));
        }
        (None, None) => {}
    }

    query.group_by("properties.id");

    if let Some(rating) = filter.minimum_rating {
        query.having(Clause::gte("avg(property_reviews.rating)", rating));
    }

    query.order_by("properties.cost_per_night ASC");
    query
}
