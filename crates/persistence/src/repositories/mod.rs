//! Repository implementations for database operations.

pub mod booking_request;
pub mod hotel;

pub use booking_request::{BookingRequestRepository, NewBookingRecord};
pub use hotel::HotelRepository;
