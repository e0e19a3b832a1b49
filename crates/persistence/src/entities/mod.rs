//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod booking_request;
pub mod hotel;

pub use booking_request::{BookingRequestEntity, BookingStatusDb};
pub use hotel::HotelEntity;
