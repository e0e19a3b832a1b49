//! Domain layer for the Booksa backend.
//!
//! This crate contains:
//! - Domain models and typed API request/response shapes
//! - Pure domain services (stats aggregation, notification rendering)

pub mod models;
pub mod services;
