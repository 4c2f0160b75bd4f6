//! Property listing filters
//!
//! `FilterOptions` is what the query builder consumes: typed, every field
//! independently optional, prices in major units. `PropertySearchParams` is
//! the raw form submission (every field a string, blanks meaning "not
//! provided") and is the place where input gets validated.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Highest rating a review can carry
const MAX_RATING: f64 = 5.0;

/// Optional filters for the property listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    /// Major currency units
    pub minimum_price_per_night: Option<f64>,
    /// Major currency units
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

impl FilterOptions {
    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Raw search form fields
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySearchParams {
    pub city: Option<String>,
    pub owner_id: Option<String>,
    pub minimum_price_per_night: Option<String>,
    pub maximum_price_per_night: Option<String>,
    pub minimum_rating: Option<String>,
}

impl TryFrom<PropertySearchParams> for FilterOptions {
    type Error = ValidationError;

    fn try_from(params: PropertySearchParams) -> Result<Self, Self::Error> {
        let city = non_blank(params.city);

        let owner_id = match non_blank(params.owner_id) {
            Some(raw) => Some(raw.parse::<i32>().map_err(|_| ValidationError::InvalidNumber {
                field: "owner_id",
                value: raw,
            })?),
            None => None,
        };

        let minimum_price_per_night =
            parse_price("minimum_price_per_night", params.minimum_price_per_night)?;
        let maximum_price_per_night =
            parse_price("maximum_price_per_night", params.maximum_price_per_night)?;

        if let (Some(min), Some(max)) = (minimum_price_per_night, maximum_price_per_night) {
            if min > max {
                return Err(ValidationError::InvalidRange {
                    low: "minimum_price_per_night",
                    high: "maximum_price_per_night",
                });
            }
        }

        let minimum_rating = match parse_number("minimum_rating", params.minimum_rating)? {
            Some(rating) if !(0.0..=MAX_RATING).contains(&rating) => {
                return Err(ValidationError::OutOfRange {
                    field: "minimum_rating",
                    reason: "must be between 0 and 5",
                });
            }
            rating => rating,
        };

        Ok(Self {
            city,
            owner_id,
            minimum_price_per_night,
            maximum_price_per_night,
            minimum_rating,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_number(field: &'static str, value: Option<String>) -> Result<Option<f64>, ValidationError> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        Ok(_) => Err(ValidationError::OutOfRange {
            field,
            reason: "must be finite",
        }),
        Err(_) => Err(ValidationError::InvalidNumber { field, value: raw }),
    }
}

fn parse_price(field: &'static str, value: Option<String>) -> Result<Option<f64>, ValidationError> {
    match parse_number(field, value)? {
        Some(price) if price < 0.0 => Err(ValidationError::OutOfRange {
            field,
            reason: "cannot be negative",
        }),
        price => Ok(price),
    }
}
