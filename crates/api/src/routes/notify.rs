//! Batch mail-relay endpoint.
//!
//! Lets the group-inquiry flow fan one stay out to several hotels at once.
//! The handler only resolves recipient addresses and enqueues notices; the
//! notification worker does the sending.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain::services::notification::{render_group_inquiry, GroupStay};
use persistence::repositories::HotelRepository;
use shared::validation::validate_stay_dates;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotifyHotelsRequest {
    #[validate(length(min = 1, message = "At least one hotel id is required"))]
    pub hotel_ids: Vec<Uuid>,

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

    #[serde(default = "domain::models::booking::default_adults")]
    #[validate(custom(function = "shared::validation::validate_count"))]
    pub number_of_adults: i32,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_count"))]
    pub number_of_children: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyHotelsResponse {
    /// Number of notices handed to the notification queue.
    pub queued: usize,
}

/// `POST /api/v1/notify/hotels` - queue a group inquiry for each hotel.
///
/// Unknown hotel IDs are skipped rather than failing the batch.
pub async fn notify_hotels(
    State(state): State<AppState>,
    Json(payload): Json<NotifyHotelsRequest>,
) -> Result<Json<NotifyHotelsResponse>, ApiError> {
    payload.validate()?;
    validate_stay_dates(payload.check_in_date, payload.check_out_date)
        .map_err(|e| ApiError::Validation(e.message.map(|m| m.to_string()).unwrap_or_default()))?;

    let repo = HotelRepository::new(state.pool.clone());
    let recipients = repo.emails_by_ids(&payload.hotel_ids).await?;

    let stay = GroupStay {
        check_in_date: payload.check_in_date,
        check_out_date: payload.check_out_date,
        quad_rooms: payload.quad_rooms,
        triple_rooms: payload.triple_rooms,
        double_rooms: payload.double_rooms,
        single_rooms: payload.single_rooms,
        number_of_adults: payload.number_of_adults,
        number_of_children: payload.number_of_children,
    };

    let base_url = &state.config.email.base_url;
    let mut queued = 0;
    for (_hotel_id, email) in &recipients {
        state
            .notifier
            .enqueue(render_group_inquiry(email, &stay, base_url));
        queued += 1;
    }

    tracing::info!(
        requested = payload.hotel_ids.len(),
        queued = queued,
        "Group inquiry notices queued"
    );

    Ok(Json(NotifyHotelsResponse { queued }))
}
