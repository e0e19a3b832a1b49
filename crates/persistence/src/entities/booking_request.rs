//! Booking request entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::booking::{BookingRequest, BookingStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for booking request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
pub enum BookingStatusDb {
    Pending,
    Confirmed,
    Declined,
}

impl From<BookingStatusDb> for BookingStatus {
    fn from(status: BookingStatusDb) -> Self {
        match status {
            BookingStatusDb::Pending => BookingStatus::Pending,
            BookingStatusDb::Confirmed => BookingStatus::Confirmed,
            BookingStatusDb::Declined => BookingStatus::Declined,
        }
    }
}

impl From<BookingStatus> for BookingStatusDb {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => BookingStatusDb::Pending,
            BookingStatus::Confirmed => BookingStatusDb::Confirmed,
            BookingStatus::Declined => BookingStatusDb::Declined,
        }
    }
}

/// Database row mapping for the booking_requests table.
#[derive(Debug, Clone, FromRow)]
pub struct BookingRequestEntity {
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
    pub status: BookingStatusDb,
    pub quote: Option<String>,
    pub decline_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingRequestEntity {
    /// Converts to the domain model.
    pub fn into_model(self) -> BookingRequest {
        BookingRequest {
            id: self.id,
            hotel_code: self.hotel_code,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            country: self.country,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            quad_rooms: self.quad_rooms,
            triple_rooms: self.triple_rooms,
            double_rooms: self.double_rooms,
            single_rooms: self.single_rooms,
            number_of_adults: self.number_of_adults,
            number_of_children: self.number_of_children,
            breakfast_included: self.breakfast_included,
            is_business: self.is_business,
            travel_company_name: self.travel_company_name,
            status: self.status.into(),
            quote: self.quote,
            decline_reason: self.decline_reason,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Declined,
        ] {
            let db: BookingStatusDb = status.into();
            let back: BookingStatus = db.into();
            assert_eq!(back, status);
        }
    }
}
