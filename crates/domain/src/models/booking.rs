//! Booking request domain models.
//!
//! A booking request is a traveler's proposal for a group stay at one
//! hotel. It starts `pending` and is answered exactly once by the hotel:
//! confirmed with a quote or declined with a reason. Both outcomes are
//! terminal.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Declined,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Declined => write!(f, "declined"),
        }
    }
}

/// A traveler's booking request for a group stay.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub id: Uuid,
    pub hotel_code: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub quad_rooms: i32,
    pub triple_rooms: i32,
    pub double_rooms: i32,
    pub single_rooms: i32,
    pub number_of_adults: i32,
    pub number_of_children: i32,
    pub breakfast_included: bool,
    pub is_business: bool,
    pub travel_company_name: Option<String>,
    pub status: BookingStatus,
    /// Hotel-supplied price/terms text, set only on confirm.
    pub quote: Option<String>,
    /// Hotel-supplied reason, set only on decline.
    pub decline_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Serde default for adult counts; a request is for at least one adult
/// unless the form says otherwise. Shared with the mail-relay payload.
pub fn default_adults() -> i32 {
    1
}

fn default_breakfast() -> bool {
    true
}

/// Request body for creating a booking request.
///
/// Room counts default to zero and guests to one adult, matching the
/// booking form. "At least one room" and "company name when business"
/// are intentionally not enforced; the business rules never required them.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 50, message = "Phone number is required"))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 100, message = "Country is required"))]
    pub country: String,

    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_count"))]
    pub quad_rooms: i32,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_count"))]
    pub triple_rooms: i32,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_count"))]
    pub double_rooms: i32,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_count"))]
    pub single_rooms: i32,

    #[serde(default = "default_adults")]
    #[validate(range(min = 0, message = "Adult count must be non-negative"))]
    pub number_of_adults: i32,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_count"))]
    pub number_of_children: i32,

    #[serde(default = "default_breakfast")]
    pub breakfast_included: bool,

    #[serde(default)]
    pub is_business: bool,

    #[validate(length(max = 200, message = "Company name is too long"))]
    pub travel_company_name: Option<String>,
}

/// The hotel's decision on a pending booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Confirm,
    Decline,
}

/// Request body for confirming or declining a booking request.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RespondToBookingRequest {
    pub decision: Decision,

    /// Quote text when confirming, decline reason when declining.
    /// Required and non-empty either way.
    #[validate(custom(function = "shared::validation::validate_detail"))]
    #[validate(length(max = 2000, message = "Detail is too long"))]
    pub detail: String,
}

/// Response wrapper for booking listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListResponse {
    pub data: Vec<BookingRequest>,
}
