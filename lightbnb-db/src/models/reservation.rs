//! Reservations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::PropertyListing;

/// A guest's reservation together with the reserved property and its
/// average rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "reservation_id")]
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(flatten)]
    pub listing: PropertyListing,
}
