use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoder request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("geocoder returned an unparseable coordinate: {0}")]
    InvalidCoordinate(String),
}
