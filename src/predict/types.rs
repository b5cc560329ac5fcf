use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A predicted window in which the satellite is optically visible from the observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VisiblePass {
    /// Unix seconds.
    #[serde(rename = "startUTC")]
    pub start_utc: i64,
    /// Seconds.
    pub duration: i64,
    #[serde(rename = "endUTC", default)]
    pub end_utc: Option<i64>,
    #[serde(rename = "maxEl", default)]
    pub max_elevation_deg: Option<f64>,
    #[serde(default)]
    pub mag: Option<f64>,
    #[serde(rename = "startAzCompass", default)]
    pub start_compass: Option<String>,
    #[serde(rename = "endAzCompass", default)]
    pub end_compass: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisualPassesResponse {
    /// Absent when the upstream found no passes.
    #[serde(default)]
    pub passes: Vec<VisiblePass>,
}
