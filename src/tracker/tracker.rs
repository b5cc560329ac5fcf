use chrono::{FixedOffset, Utc};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::error::TrackerError;
use super::output::OutputPanel;
use crate::coordinate::Coordinate;
use crate::geocode::Geocoder;
use crate::map::{MapScene, MapView};
use crate::predict::summarize;
use crate::satellite::{SatelliteError, SatelliteFeed};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrackerStatus {
    pub scene: MapScene,
    pub output: Vec<String>,
}

/// Runs one user action's lookup chain and owns the map view it renders into.
pub struct Tracker {
    geocoder: Arc<Geocoder>,
    feed: Arc<SatelliteFeed>,
    /// Offset used to show pass times in the user's local time.
    offset: FixedOffset,
    view: MapView,
    output: OutputPanel,
}

impl Tracker {
    pub fn new(
        geocoder: Arc<Geocoder>,
        feed: Arc<SatelliteFeed>,
        center: Coordinate,
        offset: FixedOffset,
    ) -> Self {
        Self {
            geocoder,
            feed,
            offset,
            view: MapView::new(center),
            output: OutputPanel::default(),
        }
    }

    pub fn output(&self) -> &OutputPanel {
        &self.output
    }

    pub fn status(&self) -> TrackerStatus {
        TrackerStatus {
            scene: self.view.scene().clone(),
            output: self.output.lines().to_vec(),
        }
    }

    /// Geocodes a free-text address and, on a hit, tracks from there.
    pub async fn locate_address(&mut self, address: &str) {
        let address = address.trim();
        if address.is_empty() {
            return;
        }

        match self.geocoder.search(address).await {
            Ok(Some(at)) => {
                self.view.set_user_location(at);
                self.output.replace(format!(
                    "Converted address to: Latitude {}, Longitude {}",
                    at.latitude, at.longitude
                ));
                self.track(at).await;
            }
            Ok(None) => self.output.replace("Address not found."),
            Err(e) => {
                log::warn!("Geocoding {:?} failed: {}", address, e);
                self.output.replace(format!("Error: {}", e));
            }
        }
    }

    /// Current position, path and next visible pass for an observer.
    pub async fn track(&mut self, observer: Coordinate) {
        if let Err(e) = self.try_track(observer).await {
            log::warn!(
                "Tracking from {}, {} failed: {}",
                observer.latitude,
                observer.longitude,
                e
            );
            self.output.replace(e.panel_message());
        }
    }

    async fn try_track(&mut self, observer: Coordinate) -> Result<(), TrackerError> {
        self.view.set_user_location(observer);

        let positions = self.feed.positions(observer).await?;
        let current = positions
            .first()
            .ok_or(TrackerError::NoPositions)?
            .coordinate();

        let label = self.geocoder.describe(current).await;

        self.output.replace(format!(
            "ISS Position: Latitude {}, Longitude {}",
            current.latitude, current.longitude
        ));
        self.output
            .append(format!("Right now, the ISS is passing over {}.", label));

        self.view.show_satellite(current);
        if positions.len() > 1 {
            self.view.draw_path(&positions);
        }

        self.append_next_pass(observer).await;

        self.view.fit_bounds(observer, current);
        Ok(())
    }

    async fn append_next_pass(&mut self, observer: Coordinate) {
        match self.feed.visual_passes(observer).await {
            Ok(passes) => self.output.append(summarize(
                &passes,
                Utc::now(),
                self.offset,
                self.feed.settings().pass_days,
            )),
            Err(SatelliteError::Status { status, body }) => {
                self.output.append(format!(
                    "Error fetching visual pass info: {}",
                    status.as_u16()
                ));
                self.output.append(body);
            }
            Err(e) => self.output.append(format!("Error: {}", e)),
        }
    }
}
