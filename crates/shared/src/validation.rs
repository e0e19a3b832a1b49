//! Common validation utilities for booking requests.

use chrono::NaiveDate;
use validator::ValidationError;

/// Normalizes an email address for storage and lookup: trimmed and
/// lower-cased. Applied on both write and read so lookups match no matter
/// how the address was typed.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validates that a room or guest count is non-negative.
pub fn validate_count(count: i32) -> Result<(), ValidationError> {
    if count >= 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("count_range");
        err.message = Some("Count must be non-negative".into());
        Err(err)
    }
}

/// Validates that a check-out date falls strictly after a check-in date.
pub fn validate_stay_dates(
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<(), ValidationError> {
    if check_out > check_in {
        Ok(())
    } else {
        let mut err = ValidationError::new("stay_dates");
        err.message = Some("Check-out date must be after check-in date".into());
        Err(err)
    }
}

/// Validates that a response detail (quote or decline reason) is non-empty
/// after trimming.
pub fn validate_detail(detail: &str) -> Result<(), ValidationError> {
    if detail.trim().is_empty() {
        let mut err = ValidationError::new("detail_required");
        err.message = Some("A quote or decline reason is required".into());
        Err(err)
    } else {
        Ok(())
    }
}
