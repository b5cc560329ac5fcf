use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// WGS84 latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses `"lat, lon"`. Anything after the second component is ignored.
    pub fn from_coordinates(coordinates: &str) -> Option<Self> {
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() < 2 {
            return None;
        }
        let lat = parts[0].parse().ok()?;
        let lon = parts[1].parse().ok()?;
        Some(Self::new(lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_pair() {
        let c = Coordinate::from_coordinates(" 22.28552, 114.15769 ").unwrap();
        assert_eq!(c, Coordinate::new(22.28552, 114.15769));
    }

    #[test]
    fn rejects_missing_or_non_numeric_parts() {
        assert!(Coordinate::from_coordinates("51.5").is_none());
        assert!(Coordinate::from_coordinates("north, west").is_none());
    }
}
