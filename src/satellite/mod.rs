mod client;
mod error;
mod trajectory;
mod types;

pub use client::SatelliteFeed;
pub use error::SatelliteError;
pub use trajectory::{arrow_placements, split_at_antimeridian};
pub use types::SatellitePosition;
