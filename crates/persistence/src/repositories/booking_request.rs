//! Booking request repository for database operations.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{BookingRequestEntity, BookingStatusDb};
use crate::metrics::QueryTimer;

/// Input for inserting a new booking request.
///
/// The caller is responsible for normalizing the email before insert so
/// that traveler lookups by email stay consistent.
#[derive(Debug, Clone)]
pub struct NewBookingRecord {
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
}

/// Repository for booking request-related database operations.
#[derive(Clone)]
pub struct BookingRequestRepository {
    pool: PgPool,
}

impl BookingRequestRepository {
    /// Creates a new BookingRequestRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create a new booking request in `pending` status.
    pub async fn create(
        &self,
        record: &NewBookingRecord,
    ) -> Result<BookingRequestEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_booking_request");
        let result = sqlx::query_as::<_, BookingRequestEntity>(
            r#"
            INSERT INTO booking_requests (
                hotel_code, name, email, phone_number, country,
                check_in_date, check_out_date,
                quad_rooms, triple_rooms, double_rooms, single_rooms,
                number_of_adults, number_of_children,
                breakfast_included, is_business, travel_company_name
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING id, hotel_code, name, email, phone_number, country,
                      check_in_date, check_out_date,
                      quad_rooms, triple_rooms, double_rooms, single_rooms,
                      number_of_adults, number_of_children,
                      breakfast_included, is_business, travel_company_name,
                      status, quote, decline_reason, created_at, updated_at
            "#,
        )
        .bind(&record.hotel_code)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone_number)
        .bind(&record.country)
        .bind(record.check_in_date)
        .bind(record.check_out_date)
        .bind(record.quad_rooms)
        .bind(record.triple_rooms)
        .bind(record.double_rooms)
        .bind(record.single_rooms)
        .bind(record.number_of_adults)
        .bind(record.number_of_children)
        .bind(record.breakfast_included)
        .bind(record.is_business)
        .bind(&record.travel_company_name)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a booking request by ID.
    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<BookingRequestEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_booking_request_by_id");
        let result = sqlx::query_as::<_, BookingRequestEntity>(
            r#"
            SELECT id, hotel_code, name, email, phone_number, country,
                   check_in_date, check_out_date,
                   quad_rooms, triple_rooms, double_rooms, single_rooms,
                   number_of_adults, number_of_children,
                   breakfast_included, is_business, travel_company_name,
                   status, quote, decline_reason, created_at, updated_at
            FROM booking_requests
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List booking requests for a hotel's dashboard, newest first.
    pub async fn list_for_hotel(
        &self,
        hotel_code: &str,
        status_filter: Option<BookingStatusDb>,
    ) -> Result<Vec<BookingRequestEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_booking_requests_for_hotel");
        let result = if let Some(status) = status_filter {
            sqlx::query_as::<_, BookingRequestEntity>(
                r#"
                SELECT id, hotel_code, name, email, phone_number, country,
                       check_in_date, check_out_date,
                       quad_rooms, triple_rooms, double_rooms, single_rooms,
                       number_of_adults, number_of_children,
                       breakfast_included, is_business, travel_company_name,
                       status, quote, decline_reason, created_at, updated_at
                FROM booking_requests
                WHERE hotel_code = $1 AND status = $2
                ORDER BY created_at DESC
                "#,
            )
            .bind(hotel_code)
            .bind(status)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, BookingRequestEntity>(
                r#"
                SELECT id, hotel_code, name, email, phone_number, country,
                       check_in_date, check_out_date,
                       quad_rooms, triple_rooms, double_rooms, single_rooms,
                       number_of_adults, number_of_children,
                       breakfast_included, is_business, travel_company_name,
                       status, quote, decline_reason, created_at, updated_at
                FROM booking_requests
                WHERE hotel_code = $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(hotel_code)
            .fetch_all(&self.pool)
            .await
        };
        timer.record();
        result
    }

    /// List booking requests submitted with the given (normalized) email,
    /// newest first.
    pub async fn list_for_email(
        &self,
        email: &str,
    ) -> Result<Vec<BookingRequestEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_booking_requests_for_email");
        let result = sqlx::query_as::<_, BookingRequestEntity>(
            r#"
            SELECT id, hotel_code, name, email, phone_number, country,
                   check_in_date, check_out_date,
                   quad_rooms, triple_rooms, double_rooms, single_rooms,
                   number_of_adults, number_of_children,
                   breakfast_included, is_business, travel_company_name,
                   status, quote, decline_reason, created_at, updated_at
            FROM booking_requests
            WHERE email = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Respond to a pending booking request (confirm or decline).
    ///
    /// The `status = 'pending'` guard makes the transition atomic: if the
    /// request was already answered, this returns `None` and the caller
    /// reports a conflict instead of overwriting the earlier decision.
    pub async fn respond(
        &self,
        id: Uuid,
        status: BookingStatusDb,
        quote: Option<&str>,
        decline_reason: Option<&str>,
    ) -> Result<Option<BookingRequestEntity>, sqlx::Error> {
        let timer = QueryTimer::new("respond_to_booking_request");
        let result = sqlx::query_as::<_, BookingRequestEntity>(
            r#"
            UPDATE booking_requests
            SET status = $2, quote = $3, decline_reason = $4, updated_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING id, hotel_code, name, email, phone_number, country,
                      check_in_date, check_out_date,
                      quad_rooms, triple_rooms, double_rooms, single_rooms,
                      number_of_adults, number_of_children,
                      breakfast_included, is_business, travel_company_name,
                      status, quote, decline_reason, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(quote)
        .bind(decline_reason)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
