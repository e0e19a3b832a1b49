//! Shared utilities and common types for the Booksa backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Pass-code hashing with Argon2id
//! - Dashboard session tokens (JWT)
//! - Booking-domain validation helpers

pub mod jwt;
pub mod password;
pub mod validation;
