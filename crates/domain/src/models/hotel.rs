//! Hotel domain models.
//!
//! Hotels are created out-of-band (seed SQL / back-office tooling) and are
//! read-only from this service's perspective. The dashboard pass-code is
//! stored only as an Argon2id hash and never leaves the persistence layer
//! in API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A participating hotel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: Uuid,
    /// Unique short code used in booking URLs.
    pub code: String,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Contact address for new-request alerts. Not exposed through the
    /// public catalog endpoints.
    #[serde(skip_serializing)]
    pub email: String,
    pub reviews_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Compact hotel shape for catalog listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSummary {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub location: Option<String>,
}

impl From<&Hotel> for HotelSummary {
    fn from(hotel: &Hotel) -> Self {
        Self {
            id: hotel.id,
            code: hotel.code.clone(),
            name: hotel.name.clone(),
            description: hotel.description.clone(),
            image_url: hotel.image_url.clone(),
            location: hotel.location.clone(),
        }
    }
}

/// Response for the hotel catalog endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListResponse {
    pub data: Vec<HotelSummary>,
}

/// Request body for hotel-admin login.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HotelLoginRequest {
    /// The hotel's public code.
    #[validate(length(min = 1, max = 64, message = "Hotel code is required"))]
    pub hotel_code: String,

    /// The hotel's dashboard pass-code.
    #[validate(length(min = 1, message = "Pass-code is required"))]
    pub pass_code: String,
}

/// Response body for a successful hotel-admin login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSessionResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub hotel: HotelSummary,
}
