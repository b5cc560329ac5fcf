use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{FixedOffset, Local};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::coordinate::Coordinate;
use crate::tracker::TrackerStatus;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OverviewQuery {
    /// Observer latitude in degrees.
    pub lat: f64,
    /// Observer longitude in degrees.
    pub lon: f64,
    /// Minutes east of UTC used to format pass times. Defaults to the server's offset.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocateQuery {
    /// Free-text address.
    pub address: String,
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/overview",
    tag = "tracker",
    params(OverviewQuery),
    responses(
        (status = 200, description = "Map scene and output panel", body = TrackerStatus),
        (status = 400, description = "Invalid parameters", body = ErrorResponse)
    )
)]
pub async fn overview(
    State(state): State<AppState>,
    Query(query): Query<OverviewQuery>,
) -> ApiResult<Json<TrackerStatus>> {
    let offset = utc_offset(query.utc_offset_minutes)?;
    let mut tracker = state.tracker(offset);
    tracker.track(Coordinate::new(query.lat, query.lon)).await;
    Ok(Json(tracker.status()))
}

#[utoipa::path(
    get,
    path = "/api/locate",
    tag = "tracker",
    params(LocateQuery),
    responses(
        (status = 200, description = "Map scene and output panel", body = TrackerStatus),
        (status = 400, description = "Invalid parameters", body = ErrorResponse)
    )
)]
pub async fn locate(
    State(state): State<AppState>,
    Query(query): Query<LocateQuery>,
) -> ApiResult<Json<TrackerStatus>> {
    let offset = utc_offset(query.utc_offset_minutes)?;
    let mut tracker = state.tracker(offset);
    tracker.locate_address(&query.address).await;
    Ok(Json(tracker.status()))
}

fn utc_offset(minutes: Option<i32>) -> ApiResult<FixedOffset> {
    match minutes {
        None => Ok(*Local::now().offset()),
        Some(m) => m
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ApiError::Validation(format!("utc offset out of range: {}", m))),
    }
}
