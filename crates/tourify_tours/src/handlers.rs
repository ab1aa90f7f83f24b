// File: crates/tourify_tours/src/handlers.rs
use crate::logic::{TourEngine, TourError};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tourify_common::models::{Slot, Tour, TourStats};
use tracing::error;

// Define shared state needed by tour handlers
#[derive(Clone)]
pub struct TourState {
    pub engine: Arc<TourEngine>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookTourRequest {
    pub property_id: String,
    /// RFC 3339 timestamp on a 30-minute boundary.
    pub tour_time: DateTime<Utc>,
    pub user_id: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct RescheduleParams {
    /// RFC 3339 timestamp of the replacement slot.
    pub tour_time: DateTime<Utc>,
}

/// Business-rule violations surface as 400 with the rule's message as
/// body; only infrastructure failures become 500.
fn error_response(err: TourError) -> (StatusCode, String) {
    match err {
        TourError::Store(err) => {
            error!("booking store failure: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
        err => (StatusCode::BAD_REQUEST, err.to_string()),
    }
}

/// Handler to get available tour slots for a property.
#[axum::debug_handler]
pub async fn get_available_slots_handler(
    State(state): State<Arc<TourState>>,
    Path(property_id): Path<String>,
) -> Result<Json<Vec<Slot>>, (StatusCode, String)> {
    state
        .engine
        .available_slots(&property_id)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Handler to book a tour slot.
#[axum::debug_handler]
pub async fn book_tour_handler(
    State(state): State<Arc<TourState>>,
    Json(payload): Json<BookTourRequest>,
) -> Result<Json<Tour>, (StatusCode, String)> {
    state
        .engine
        .book(&payload.property_id, payload.tour_time, &payload.user_id)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Handler to cancel a booked tour.
#[axum::debug_handler]
pub async fn cancel_tour_handler(
    State(state): State<Arc<TourState>>,
    Path(tour_id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .engine
        .cancel(tour_id)
        .await
        .map(|_| StatusCode::OK)
        .map_err(error_response)
}

/// Handler to move a booked tour to a new slot.
#[axum::debug_handler]
pub async fn reschedule_tour_handler(
    State(state): State<Arc<TourState>>,
    Path(tour_id): Path<i64>,
    Query(params): Query<RescheduleParams>,
) -> Result<Json<Tour>, (StatusCode, String)> {
    state
        .engine
        .reschedule(tour_id, params.tour_time)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Handler for the aggregate booking counters.
#[axum::debug_handler]
pub async fn get_stats_handler(
    State(state): State<Arc<TourState>>,
) -> Result<Json<TourStats>, (StatusCode, String)> {
    state.engine.stats().await.map(Json).map_err(error_response)
}
