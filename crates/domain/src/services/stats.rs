//! Booking statistics aggregation for the admin dashboard.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::booking::{BookingRequest, BookingStatus};

/// Aggregated dashboard statistics over a set of booking requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub pending: u64,
    pub confirmed: u64,
    pub declined: u64,
    /// Request count per country of residence. Blank countries are bucketed
    /// under "Unknown".
    pub requests_per_country: BTreeMap<String, u64>,
}

/// Computes dashboard statistics over an in-memory slice of bookings.
///
/// Pure and deterministic: no I/O, and the per-country map is ordered so
/// equal inputs serialize identically.
pub fn compute_stats(bookings: &[BookingRequest]) -> BookingStats {
    let mut stats = BookingStats::default();

    for booking in bookings {
        match booking.status {
            BookingStatus::Pending => stats.pending += 1,
            BookingStatus::Confirmed => stats.confirmed += 1,
            BookingStatus::Declined => stats.declined += 1,
        }

        let country = booking.country.trim();
        let key = if country.is_empty() {
            "Unknown".to_string()
        } else {
            country.to_string()
        };
        *stats.requests_per_country.entry(key).or_insert(0) += 1;
    }

    stats
}
