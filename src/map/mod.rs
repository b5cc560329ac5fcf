mod scene;
mod view;

pub use scene::{Arrow, Bounds, Circle, MapScene, Marker, MarkerKind, Polyline, Viewport};
pub use view::MapView;
