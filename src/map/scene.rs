use serde::Serialize;
use utoipa::ToSchema;

use crate::coordinate::Coordinate;

pub const SATELLITE_VISIBILITY_RADIUS_M: f64 = 2_200_000.0;
pub const PATH_COLOR: &str = "#ff0000";
pub const VISIBILITY_COLOR: &str = "#ffe066";
pub const ARROW_GLYPH: &str = "▶";
pub const FIT_PADDING_PX: u32 = 50;
pub const DEFAULT_ZOOM: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    User,
    Satellite,
}

impl MarkerKind {
    pub fn glyph(self) -> &'static str {
        match self {
            MarkerKind::User => "🏠",
            MarkerKind::Satellite => "🛰️",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MarkerKind::User => "Your Location",
            MarkerKind::Satellite => "ISS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: Coordinate,
    pub glyph: String,
    pub title: String,
}

impl Marker {
    pub fn new(kind: MarkerKind, position: Coordinate) -> Self {
        Self {
            kind,
            position,
            glyph: kind.glyph().to_string(),
            title: kind.title().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Circle {
    pub center: Coordinate,
    pub radius_m: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub weight: u32,
    pub dash_array: String,
}

impl Circle {
    /// Ground footprint from which the satellite can be seen.
    pub fn visibility(center: Coordinate) -> Self {
        Self {
            center,
            radius_m: SATELLITE_VISIBILITY_RADIUS_M,
            color: VISIBILITY_COLOR.to_string(),
            fill_color: VISIBILITY_COLOR.to_string(),
            fill_opacity: 0.3,
            weight: 2,
            dash_array: "5, 10".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Polyline {
    pub points: Vec<Coordinate>,
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

impl Polyline {
    pub fn path(points: Vec<Coordinate>) -> Self {
        Self {
            points,
            color: PATH_COLOR.to_string(),
            weight: 3,
            opacity: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Arrow {
    pub position: Coordinate,
    pub rotation_deg: f64,
    pub glyph: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
    pub padding_px: u32,
}

impl Bounds {
    pub fn covering(a: Coordinate, b: Coordinate) -> Self {
        Self {
            south_west: Coordinate::new(a.latitude.min(b.latitude), a.longitude.min(b.longitude)),
            north_east: Coordinate::new(a.latitude.max(b.latitude), a.longitude.max(b.longitude)),
            padding_px: FIT_PADDING_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
    pub min_zoom: u8,
    /// Panning limits.
    pub max_south_west: Coordinate,
    pub max_north_east: Coordinate,
}

/// Everything a map widget needs to draw the current state.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MapScene {
    pub viewport: Viewport,
    pub user_marker: Option<Marker>,
    pub satellite_marker: Option<Marker>,
    pub visibility_circle: Option<Circle>,
    pub path: Vec<Polyline>,
    pub arrows: Vec<Arrow>,
    pub fit_bounds: Option<Bounds>,
}
