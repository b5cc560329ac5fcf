use serde::Serialize;
use utoipa::ToSchema;

use super::types::SatellitePosition;
use crate::coordinate::Coordinate;

/// Longitude jump between adjacent samples that is read as a dateline wrap.
pub const WRAP_THRESHOLD_DEG: f64 = 180.0;
const ARROW_COUNT: usize = 5;

/// A direction glyph anchored on a trajectory sample.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ArrowPlacement {
    pub index: usize,
    pub position: Coordinate,
    pub rotation_deg: f64,
}

pub fn wraps(from: &SatellitePosition, to: &SatellitePosition) -> bool {
    (to.longitude - from.longitude).abs() > WRAP_THRESHOLD_DEG
}

/// Planar bearing from `from` to `to` in degrees, 0 = north, 90 = east.
/// Not geodesic; good enough for rotating a glyph.
pub fn bearing_deg(from: Coordinate, to: Coordinate) -> f64 {
    (to.longitude - from.longitude)
        .atan2(to.latitude - from.latitude)
        .to_degrees()
}

/// Splits samples into maximal runs with no antimeridian wrap between neighbours.
pub fn split_at_antimeridian(samples: &[SatellitePosition]) -> Vec<Vec<Coordinate>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (i, sample) in samples.iter().enumerate() {
        current.push(sample.coordinate());

        if let Some(next) = samples.get(i + 1) {
            if wraps(sample, next) {
                segments.push(std::mem::take(&mut current));
            }
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Roughly five evenly spaced arrows along the whole sequence, skipping wrap points.
pub fn arrow_placements(samples: &[SatellitePosition]) -> Vec<ArrowPlacement> {
    let interval = (samples.len() / ARROW_COUNT).max(1);

    (interval..samples.len())
        .step_by(interval)
        .filter_map(|i| {
            let prev = &samples[i - 1];
            let cur = &samples[i];
            if wraps(prev, cur) {
                return None;
            }
            Some(ArrowPlacement {
                index: i,
                position: cur.coordinate(),
                rotation_deg: bearing_deg(prev.coordinate(), cur.coordinate()),
            })
        })
        .collect()
}
