//! Properties

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Property record from database.
///
/// `cost_per_night` is stored in minor currency units (cents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

/// Property with its average review rating, as returned by listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Fields for a new property. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i32,
    pub cover_photo_url: String,
    pub thumbnail_photo_url: String,
    /// Minor currency units
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub province: String,
    pub city: String,
    pub country: String,
    pub street: String,
    pub post_code: String,
}

impl NewProperty {
    /// Check required text fields and non-negative amounts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("title", &self.title),
            ("cover_photo_url", &self.cover_photo_url),
            ("thumbnail_photo_url", &self.thumbnail_photo_url),
            ("province", &self.province),
            ("city", &self.city),
            ("country", &self.country),
            ("street", &self.street),
            ("post_code", &self.post_code),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::Empty { field });
            }
        }

        let amounts = [
            ("cost_per_night", self.cost_per_night),
            ("parking_spaces", self.parking_spaces),
            ("number_of_bathrooms", self.number_of_bathrooms),
            ("number_of_bedrooms", self.number_of_bedrooms),
        ];
        for (field, value) in amounts {
            if value < 0 {
                return Err(ValidationError::OutOfRange {
                    field,
                    reason: "cannot be negative",
                });
            }
        }

        Ok(())
    }
}
