//! Domain models.

pub mod booking;
pub mod hotel;
