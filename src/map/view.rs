use super::scene::{
    Arrow, Bounds, Circle, MapScene, Marker, MarkerKind, Polyline, Viewport, ARROW_GLYPH,
    DEFAULT_ZOOM, PATH_COLOR,
};
use crate::coordinate::Coordinate;
use crate::satellite::{arrow_placements, split_at_antimeridian, SatellitePosition};

/// Owns the live overlay layers of one map. Each render call replaces the
/// layers it manages; nothing accumulates across calls.
#[derive(Debug, Clone)]
pub struct MapView {
    scene: MapScene,
}

impl MapView {
    pub fn new(center: Coordinate) -> Self {
        Self {
            scene: MapScene {
                viewport: Viewport {
                    center,
                    zoom: DEFAULT_ZOOM,
                    min_zoom: DEFAULT_ZOOM,
                    max_south_west: Coordinate::new(-90.0, -180.0),
                    max_north_east: Coordinate::new(90.0, 180.0),
                },
                user_marker: None,
                satellite_marker: None,
                visibility_circle: None,
                path: Vec::new(),
                arrows: Vec::new(),
                fit_bounds: None,
            },
        }
    }

    pub fn set_user_location(&mut self, at: Coordinate) {
        set_marker(&mut self.scene.user_marker, MarkerKind::User, at);
    }

    pub fn show_satellite(&mut self, at: Coordinate) {
        set_marker(&mut self.scene.satellite_marker, MarkerKind::Satellite, at);
        self.scene.visibility_circle = Some(Circle::visibility(at));
    }

    /// Replaces the trajectory: one polyline per wrap-free segment, plus arrows.
    pub fn draw_path(&mut self, samples: &[SatellitePosition]) {
        self.scene.path = split_at_antimeridian(samples)
            .into_iter()
            .filter(|segment| segment.len() > 1)
            .map(Polyline::path)
            .collect();

        self.scene.arrows = arrow_placements(samples)
            .into_iter()
            .map(|placement| Arrow {
                position: placement.position,
                rotation_deg: placement.rotation_deg,
                glyph: ARROW_GLYPH.to_string(),
                color: PATH_COLOR.to_string(),
            })
            .collect();
    }

    pub fn fit_bounds(&mut self, a: Coordinate, b: Coordinate) {
        self.scene.fit_bounds = Some(Bounds::covering(a, b));
    }

    pub fn scene(&self) -> &MapScene {
        &self.scene
    }
}

fn set_marker(slot: &mut Option<Marker>, kind: MarkerKind, at: Coordinate) {
    match slot {
        Some(marker) => marker.position = at,
        None => *slot = Some(Marker::new(kind, at)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(points: &[(f64, f64)]) -> Vec<SatellitePosition> {
        points
            .iter()
            .map(|&(lat, lon)| SatellitePosition {
                latitude: lat,
                longitude: lon,
                altitude_km: None,
                timestamp: 0,
            })
            .collect()
    }

    #[test]
    fn starts_empty_at_world_zoom() {
        let view = MapView::new(Coordinate::new(10.0, 20.0));
        let scene = view.scene();
        assert_eq!(scene.viewport.zoom, 2);
        assert_eq!(scene.viewport.center, Coordinate::new(10.0, 20.0));
        assert!(scene.user_marker.is_none());
        assert!(scene.path.is_empty());
    }

    #[test]
    fn markers_move_instead_of_duplicating() {
        let mut view = MapView::new(Coordinate::default());
        view.set_user_location(Coordinate::new(1.0, 1.0));
        view.set_user_location(Coordinate::new(2.0, 2.0));
        view.show_satellite(Coordinate::new(3.0, 3.0));
        view.show_satellite(Coordinate::new(4.0, 4.0));

        let scene = view.scene();
        let user = scene.user_marker.as_ref().unwrap();
        assert_eq!(user.position, Coordinate::new(2.0, 2.0));
        assert_eq!(user.glyph, "🏠");
        let circle = scene.visibility_circle.as_ref().unwrap();
        assert_eq!(circle.center, Coordinate::new(4.0, 4.0));
        assert_eq!(circle.radius_m, 2_200_000.0);
    }

    #[test]
    fn redrawing_path_replaces_layers() {
        let mut view = MapView::new(Coordinate::default());
        let first: Vec<(f64, f64)> = (0..10)
            .map(|i| (0.0, 170.0 + i as f64 * 2.0 - 20.0))
            .collect();
        view.draw_path(&samples(&first));
        assert_eq!(view.scene().path.len(), 1);
        assert!(!view.scene().arrows.is_empty());

        view.draw_path(&samples(&[(0.0, 178.0), (1.0, 179.0), (2.0, -179.0), (3.0, -178.0)]));
        let scene = view.scene();
        assert_eq!(scene.path.len(), 2);
        assert_eq!(scene.path[0].points.len(), 2);
        assert_eq!(scene.path[1].points.len(), 2);
        // interval 1: arrows at 1 and 3, index 2 straddles the wrap.
        assert_eq!(scene.arrows.len(), 2);
    }

    #[test]
    fn single_sample_segments_are_not_drawn() {
        let mut view = MapView::new(Coordinate::default());
        view.draw_path(&samples(&[(0.0, 178.0), (1.0, 179.0), (2.0, -179.0)]));
        assert_eq!(view.scene().path.len(), 1);
    }

    #[test]
    fn fit_bounds_covers_both_points() {
        let mut view = MapView::new(Coordinate::default());
        view.fit_bounds(Coordinate::new(22.0, 114.0), Coordinate::new(-10.0, 150.0));
        let bounds = view.scene().fit_bounds.clone().unwrap();
        assert_eq!(bounds.south_west, Coordinate::new(-10.0, 114.0));
        assert_eq!(bounds.north_east, Coordinate::new(22.0, 150.0));
        assert_eq!(bounds.padding_px, 50);
    }
}
