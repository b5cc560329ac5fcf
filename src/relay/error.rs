use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("missing path")]
    MissingPath,
    #[error("endpoint not allowed by proxy: {0}")]
    NotAllowed(String),
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
