use std::sync::Arc;

use chrono::FixedOffset;
use thiserror::Error;

use crate::geocode::{GeocodeError, Geocoder};
use crate::relay::{Relay, RelayError};
use crate::satellite::SatelliteFeed;
use crate::tracker::Tracker;

use super::config::Config;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("relay setup failed: {0}")]
    Relay(#[from] RelayError),
    #[error("geocoder setup failed: {0}")]
    Geocode(#[from] GeocodeError),
}

/// Shared, read-only handles. Per-request view state lives in each [`Tracker`].
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub relay: Arc<Relay>,
    pub feed: Arc<SatelliteFeed>,
    pub geocoder: Arc<Geocoder>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, StateError> {
        let relay = Arc::new(Relay::from_config(&config.relay)?);
        let feed = Arc::new(SatelliteFeed::new(relay.clone(), config.tracking.clone()));
        let geocoder = Arc::new(Geocoder::new(&config.geocoder)?);
        Ok(Self {
            config: Arc::new(config),
            relay,
            feed,
            geocoder,
        })
    }

    pub fn tracker(&self, offset: FixedOffset) -> Tracker {
        Tracker::new(
            self.geocoder.clone(),
            self.feed.clone(),
            self.config.default_location(),
            offset,
        )
    }
}
