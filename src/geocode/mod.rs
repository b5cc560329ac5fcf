mod client;
mod error;
mod label;
mod types;

pub use client::Geocoder;
pub use error::GeocodeError;
