//! Reservation repository

use crate::error::Result;
use crate::executor::{decode_all, QueryExecutor};
use crate::models::Reservation;
use crate::query::{Clause, SelectBuilder, Statement};

/// Default number of reservations returned for a guest
pub const DEFAULT_RESERVATION_LIMIT: i64 = 10;

const RESERVATIONS_BASE: &str = r#"
SELECT reservations.id AS reservation_id, reservations.start_date, reservations.end_date,
       properties.*, avg(property_reviews.rating)::float8 AS average_rating
FROM reservations
JOIN properties ON reservations.property_id = properties.id
JOIN property_reviews ON property_reviews.property_id = properties.id
"#;

/// Reservation repository
pub struct ReservationRepo<'a, E: ?Sized> {
    executor: &'a E,
}

impl<'a, E: QueryExecutor + ?Sized> ReservationRepo<'a, E> {
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// A guest's reservations with property details, earliest first.
    pub async fn list_for_guest(&self, guest_id: i32, limit: i64) -> Result<Vec<Reservation>> {
        let records = self
            .executor
            .fetch_many(&guest_reservations_query(guest_id, limit))
            .await?;
        decode_all("reservation", records)
    }
}

fn guest_reservations_query(guest_id: i32, limit: i64) -> Statement {
    SelectBuilder::new(RESERVATIONS_BASE)
        .filter(Clause::eq("reservations.guest_id", guest_id))
        .group_by("properties.id, reservations.id")
        .order_by("reservations.start_date")
        .limit(limit)
        .build()
}
