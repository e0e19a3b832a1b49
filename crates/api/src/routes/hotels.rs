//! Public hotel catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use domain::models::hotel::{Hotel, HotelListResponse, HotelSummary};
use persistence::repositories::HotelRepository;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against name and description.
    pub search: Option<String>,
}

/// `GET /api/v1/hotels` - list the hotel catalog.
pub async fn list_hotels(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<HotelListResponse>, ApiError> {
    let repo = HotelRepository::new(state.pool.clone());

    let term = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let hotels = repo.search(term).await?;

    let data: Vec<HotelSummary> = hotels
        .into_iter()
        .map(|entity| HotelSummary::from(&entity.into_model()))
        .collect();

    Ok(Json(HotelListResponse { data }))
}

/// `GET /api/v1/hotels/:code` - hotel detail for the booking page.
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Hotel>, ApiError> {
    let repo = HotelRepository::new(state.pool.clone());

    let entity = repo
        .find_by_code(&code)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Hotel '{}' not found", code)))?;

    Ok(Json(entity.into_model()))
}
