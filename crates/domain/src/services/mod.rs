//! Pure domain services.

pub mod notification;
pub mod stats;
