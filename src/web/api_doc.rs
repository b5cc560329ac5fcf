use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use crate::coordinate::Coordinate;
use crate::map::{Arrow, Bounds, Circle, MapScene, Marker, MarkerKind, Polyline, Viewport};
use crate::tracker::TrackerStatus;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::relay::forward,
        super::api::overview::overview,
        super::api::overview::locate,
    ),
    components(
        schemas(
            ErrorResponse,
            TrackerStatus,
            MapScene,
            Viewport,
            Marker,
            MarkerKind,
            Circle,
            Polyline,
            Arrow,
            Bounds,
            Coordinate,
        )
    ),
    info(
        title = "ISS Overhead API",
        description = "Satellite-tracking relay and ISS map overview",
        version = "0.1.0"
    ),
    tags(
        (name = "relay", description = "Allowlisted N2YO passthrough"),
        (name = "tracker", description = "ISS position, path and next visible pass")
    )
)]
pub struct ApiDoc;
