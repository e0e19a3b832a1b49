//! Traveler-facing booking endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use domain::models::booking::{BookingListResponse, BookingRequest, CreateBookingRequest};
use domain::services::notification::{render_customer_receipt, render_hotel_alert};
use persistence::repositories::{BookingRequestRepository, HotelRepository, NewBookingRecord};
use shared::validation::{normalize_email, validate_stay_dates};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_booking_created;

/// `POST /api/v1/hotels/:code/bookings` - submit a booking request.
///
/// Validation runs before any store call; an unknown hotel code is 404.
/// The customer receipt and hotel alert are queued after the insert and
/// never affect the response.
pub async fn create_booking(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingRequest>), ApiError> {
    payload.validate()?;
    validate_stay_dates(payload.check_in_date, payload.check_out_date)
        .map_err(|e| ApiError::Validation(e.message.map(|m| m.to_string()).unwrap_or_default()))?;

    let hotels = HotelRepository::new(state.pool.clone());
    let hotel = hotels
        .find_by_code(&code)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Hotel '{}' not found", code)))?
        .into_model();

    let record = NewBookingRecord {
        hotel_code: hotel.code.clone(),
        name: payload.name.trim().to_string(),
        email: normalize_email(&payload.email),
        phone_number: payload.phone_number.trim().to_string(),
        country: payload.country.trim().to_string(),
        check_in_date: payload.check_in_date,
        check_out_date: payload.check_out_date,
        quad_rooms: payload.quad_rooms,
        triple_rooms: payload.triple_rooms,
        double_rooms: payload.double_rooms,
        single_rooms: payload.single_rooms,
        number_of_adults: payload.number_of_adults,
        number_of_children: payload.number_of_children,
        breakfast_included: payload.breakfast_included,
        is_business: payload.is_business,
        travel_company_name: payload.travel_company_name,
    };

    let repo = BookingRequestRepository::new(state.pool.clone());
    let booking = repo.create(&record).await?.into_model();

    record_booking_created(&hotel.code);
    tracing::info!(
        booking_id = %booking.id,
        hotel_code = %hotel.code,
        "Booking request created"
    );

    let base_url = &state.config.email.base_url;
    state
        .notifier
        .enqueue(render_customer_receipt(&booking, &hotel, base_url));
    state
        .notifier
        .enqueue(render_hotel_alert(&booking, &hotel, base_url));

    Ok((StatusCode::CREATED, Json(booking)))
}

#[derive(Debug, Deserialize)]
pub struct TrackingQuery {
    pub email: Option<String>,
}

/// `GET /api/v1/bookings?email=...` - list a traveler's booking requests.
///
/// The email is normalized the same way as at creation, so lookups are
/// insensitive to case and surrounding whitespace.
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<TrackingQuery>,
) -> Result<Json<BookingListResponse>, ApiError> {
    let email = query
        .email
        .as_deref()
        .map(normalize_email)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::Validation("Query parameter 'email' is required".to_string()))?;

    let repo = BookingRequestRepository::new(state.pool.clone());
    let data: Vec<BookingRequest> = repo
        .list_for_email(&email)
        .await?
        .into_iter()
        .map(|entity| entity.into_model())
        .collect();

    Ok(Json(BookingListResponse { data }))
}

/// `GET /api/v1/bookings/:id` - fetch one booking request.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingRequest>, ApiError> {
    let repo = BookingRequestRepository::new(state.pool.clone());

    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Booking request {} not found", id)))?;

    Ok(Json(entity.into_model()))
}
