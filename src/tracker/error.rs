use thiserror::Error;

use crate::satellite::SatelliteError;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Satellite(#[from] SatelliteError),
    #[error("upstream returned no positions")]
    NoPositions,
}

impl TrackerError {
    /// Line shown to the user when a lookup chain stops.
    pub fn panel_message(&self) -> String {
        match self {
            TrackerError::Satellite(SatelliteError::Status { status, .. }) => {
                format!("Error: {}", status.as_u16())
            }
            other => format!("Error: {}", other),
        }
    }
}
