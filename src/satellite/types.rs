use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::coordinate::Coordinate;

/// One timestamped ground-track sample as reported by the positions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SatellitePosition {
    #[serde(rename = "satlatitude")]
    pub latitude: f64,
    #[serde(rename = "satlongitude")]
    pub longitude: f64,
    #[serde(rename = "sataltitude", default)]
    pub altitude_km: Option<f64>,
    /// Unix seconds.
    #[serde(default)]
    pub timestamp: i64,
}

impl SatellitePosition {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SatelliteInfo {
    #[serde(default)]
    pub satname: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionsResponse {
    #[serde(default)]
    pub info: Option<SatelliteInfo>,
    #[serde(default)]
    pub positions: Vec<SatellitePosition>,
}
