use reqwest::StatusCode;
use thiserror::Error;

use crate::relay::RelayError;

#[derive(Debug, Error)]
pub enum SatelliteError {
    #[error("relay error: {0}")]
    Relay(#[from] RelayError),
    #[error("upstream returned {status}")]
    Status { status: StatusCode, body: String },
    #[error("malformed upstream response: {0}")]
    Malformed(String),
}
