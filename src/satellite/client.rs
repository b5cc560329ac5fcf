use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use super::error::SatelliteError;
use super::types::{PositionsResponse, SatellitePosition};
use crate::coordinate::Coordinate;
use crate::predict::{VisiblePass, VisualPassesResponse};
use crate::relay::{Endpoint, Relay, RelayBody};
use crate::web::config::TrackingConfig;

/// Position and visual-pass lookups for one tracked object, sent through the relay.
pub struct SatelliteFeed {
    relay: Arc<Relay>,
    settings: TrackingConfig,
}

impl SatelliteFeed {
    pub fn new(relay: Arc<Relay>, settings: TrackingConfig) -> Self {
        Self { relay, settings }
    }

    pub fn settings(&self) -> &TrackingConfig {
        &self.settings
    }

    pub fn positions_path(&self, observer: Coordinate) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}",
            Endpoint::Positions,
            self.settings.norad_id,
            observer.latitude,
            observer.longitude,
            self.settings.observer_altitude_m,
            self.settings.trajectory_window.as_secs()
        )
    }

    pub fn visual_passes_path(&self, observer: Coordinate) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}/{}",
            Endpoint::VisualPasses,
            self.settings.norad_id,
            observer.latitude,
            observer.longitude,
            self.settings.observer_altitude_m,
            self.settings.pass_days,
            self.settings.min_visibility_s
        )
    }

    /// Current position first, followed by the future trajectory window.
    pub async fn positions(
        &self,
        observer: Coordinate,
    ) -> Result<Vec<SatellitePosition>, SatelliteError> {
        let response: PositionsResponse = self.fetch(&self.positions_path(observer)).await?;
        if let Some(name) = response.info.as_ref().and_then(|i| i.satname.as_deref()) {
            log::debug!("Fetched {} positions for {}", response.positions.len(), name);
        }
        Ok(response.positions)
    }

    /// Passes in upstream order.
    pub async fn visual_passes(
        &self,
        observer: Coordinate,
    ) -> Result<Vec<VisiblePass>, SatelliteError> {
        let response: VisualPassesResponse =
            self.fetch(&self.visual_passes_path(observer)).await?;
        Ok(response.passes)
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, SatelliteError> {
        let response = self.relay.forward(path, &[]).await?;

        let value = match response.body {
            RelayBody::Json(value) if response.status.is_success() => value,
            RelayBody::Json(value) => {
                return Err(SatelliteError::Status {
                    status: response.status,
                    body: value.to_string(),
                })
            }
            RelayBody::Text(body) if !response.status.is_success() => {
                return Err(SatelliteError::Status {
                    status: response.status,
                    body,
                })
            }
            RelayBody::Text(body) => return Err(SatelliteError::Malformed(body)),
        };

        // N2YO reports key and quota problems as `{"error": "..."}` with a 200.
        if let Some(Value::String(message)) = value.get("error") {
            return Err(SatelliteError::Malformed(message.clone()));
        }

        serde_json::from_value(value).map_err(|e| SatelliteError::Malformed(e.to_string()))
    }
}
