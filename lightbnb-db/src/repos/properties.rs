//! Property repository
//!
//! Listing goes through the filter composition in
//! [`query::property`](crate::query::property); creation is a single
//! insert-returning statement.

use crate::error::Result;
use crate::executor::{decode, decode_all, QueryExecutor};
use crate::models::{FilterOptions, NewProperty, Pagination, Property, PropertyListing};
use crate::query::{build_property_page_query, build_property_query, Statement};

/// Default number of properties returned by a listing
pub const DEFAULT_PROPERTY_LIMIT: i64 = 100;

const INSERT_PROPERTY: &str = r#"
INSERT INTO properties (
    title, description, owner_id, cover_photo_url, thumbnail_photo_url,
    cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
    province, city, country, street, post_code
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
RETURNING *
"#;

/// Property repository
pub struct PropertyRepo<'a, E: ?Sized> {
    executor: &'a E,
}

impl<'a, E: QueryExecutor + ?Sized> PropertyRepo<'a, E> {
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// Properties matching `filter`, cheapest first, at most `limit`.
    pub async fn list(&self, filter: &FilterOptions, limit: i64) -> Result<Vec<PropertyListing>> {
        let records = self
            .executor
            .fetch_many(&build_property_query(filter, limit))
            .await?;
        decode_all("property", records)
    }

    /// One page of the same listing as [`list`](Self::list).
    pub async fn list_page(
        &self,
        filter: &FilterOptions,
        page: Pagination,
    ) -> Result<Vec<PropertyListing>> {
        let records = self
            .executor
            .fetch_many(&build_property_page_query(filter, page))
            .await?;
        decode_all("property", records)
    }

    /// Insert a property and return it with its store-assigned id.
    pub async fn create(&self, property: &NewProperty) -> Result<Property> {
        let record = self
            .executor
            .insert_returning("properties", &insert_property(property))
            .await?;
        decode("property", record)
    }
}

fn insert_property(p: &NewProperty) -> Statement {
    Statement::new(
        INSERT_PROPERTY.trim(),
        vec![
            p.title.as_str().into(),
            p.description.clone().into(),
            p.owner_id.into(),
            p.cover_photo_url.as_str().into(),
            p.thumbnail_photo_url.as_str().into(),
            p.cost_per_night.into(),
            p.parking_spaces.into(),
            p.number_of_bathrooms.into(),
            p.number_of_bedrooms.into(),
            p.province.as_str().into(),
            p.city.as_str().into(),
            p.country.as_str().into(),
            p.street.as_str().into(),
            p.post_code.as_str().into(),
        ],
    )
}
