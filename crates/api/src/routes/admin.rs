//! Hotel-admin dashboard endpoints.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain::models::booking::{BookingRequest, Decision, RespondToBookingRequest};
use domain::models::hotel::{HotelLoginRequest, HotelSessionResponse};
use domain::services::stats::{compute_stats, BookingStats};
use persistence::entities::BookingStatusDb;
use persistence::repositories::{BookingRequestRepository, HotelRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::hotel_auth::HotelContext;
use crate::middleware::metrics::record_booking_responded;
use crate::services::HotelAuthService;

/// `POST /api/v1/admin/login` - authenticate a hotel admin.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<HotelLoginRequest>,
) -> Result<Json<HotelSessionResponse>, ApiError> {
    payload.validate()?;

    let service = HotelAuthService::new(
        HotelRepository::new(state.pool.clone()),
        state.config.jwt.clone(),
    );
    let session = service.login(&payload).await?;

    Ok(Json(session))
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Optional lifecycle filter: pending, confirmed, or declined.
    pub status: Option<String>,
}

/// Dashboard listing: the hotel's booking requests plus aggregate stats.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub data: Vec<BookingRequest>,
    pub stats: BookingStats,
}

fn parse_status_filter(raw: &str) -> Result<BookingStatusDb, ApiError> {
    match raw {
        "pending" => Ok(BookingStatusDb::Pending),
        "confirmed" => Ok(BookingStatusDb::Confirmed),
        "declined" => Ok(BookingStatusDb::Declined),
        other => Err(ApiError::Validation(format!(
            "Unknown status filter '{}'",
            other
        ))),
    }
}

/// `GET /api/v1/admin/bookings` - the authenticated hotel's dashboard.
///
/// Stats are computed over the full (unfiltered) set so the dashboard
/// counters stay stable while a status filter is applied.
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(ctx): Extension<HotelContext>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let status_filter = query
        .status
        .as_deref()
        .map(parse_status_filter)
        .transpose()?;

    let repo = BookingRequestRepository::new(state.pool.clone());

    let all: Vec<BookingRequest> = repo
        .list_for_hotel(&ctx.hotel_code, None)
        .await?
        .into_iter()
        .map(|entity| entity.into_model())
        .collect();
    let stats = compute_stats(&all);

    let data = match status_filter {
        None => all,
        Some(filter) => {
            let wanted = filter.into();
            all.into_iter().filter(|b| b.status == wanted).collect()
        }
    };

    Ok(Json(DashboardResponse { data, stats }))
}

/// `POST /api/v1/admin/bookings/:id/respond` - confirm or decline.
///
/// The status guard lives in the UPDATE itself: when the request was
/// already answered (by this admin or a concurrent one) the update matches
/// nothing and the handler reports 409 instead of overwriting.
pub async fn respond_to_booking(
    State(state): State<AppState>,
    Extension(ctx): Extension<HotelContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RespondToBookingRequest>,
) -> Result<Json<BookingRequest>, ApiError> {
    payload.validate()?;

    let repo = BookingRequestRepository::new(state.pool.clone());

    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Booking request {} not found", id)))?;

    if existing.hotel_code != ctx.hotel_code {
        return Err(ApiError::Forbidden(
            "Booking request belongs to another hotel".to_string(),
        ));
    }

    let detail = payload.detail.trim();
    let (status, quote, decline_reason) = match payload.decision {
        Decision::Confirm => (BookingStatusDb::Confirmed, Some(detail), None),
        Decision::Decline => (BookingStatusDb::Declined, None, Some(detail)),
    };

    let updated = repo
        .respond(id, status, quote, decline_reason)
        .await?
        .ok_or_else(|| {
            ApiError::Conflict("Booking request has already been answered".to_string())
        })?;

    let booking = updated.into_model();
    record_booking_responded(match payload.decision {
        Decision::Confirm => "confirm",
        Decision::Decline => "decline",
    });
    tracing::info!(
        booking_id = %booking.id,
        hotel_code = %ctx.hotel_code,
        status = %booking.status,
        "Booking request answered"
    );

    Ok(Json(booking))
}
