use super::error::GeocodeError;
use super::label::{resolve_label, UNKNOWN_LOCATION};
use super::types::{ReversePlace, SearchHit};
use crate::coordinate::Coordinate;
use crate::web::config::GeocoderConfig;

/// Zoom level for reverse lookups; 3 resolves to country or ocean granularity.
const REVERSE_ZOOM: &str = "3";

/// Forward and reverse lookups against a Nominatim-compatible service.
pub struct Geocoder {
    client: reqwest::Client,
    base_url: String,
}

impl Geocoder {
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// First hit for a free-text address, if any.
    pub async fn search(&self, address: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let hits: Vec<SearchHit> = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("format", "json"), ("q", address)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };

        let latitude = hit
            .lat
            .trim()
            .parse()
            .map_err(|_| GeocodeError::InvalidCoordinate(hit.lat.clone()))?;
        let longitude = hit
            .lon
            .trim()
            .parse()
            .map_err(|_| GeocodeError::InvalidCoordinate(hit.lon.clone()))?;

        Ok(Some(Coordinate::new(latitude, longitude)))
    }

    pub async fn reverse(&self, at: Coordinate) -> Result<ReversePlace, GeocodeError> {
        let place = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("format", "json".to_string()),
                ("lat", at.latitude.to_string()),
                ("lon", at.longitude.to_string()),
                ("zoom", REVERSE_ZOOM.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(place)
    }

    /// Display label for a ground point. Lookup failures resolve to the unknown sentinel.
    pub async fn describe(&self, at: Coordinate) -> String {
        match self.reverse(at).await {
            Ok(place) => resolve_label(&place),
            Err(e) => {
                log::debug!(
                    "Reverse geocode failed for {}, {}: {}",
                    at.latitude,
                    at.longitude,
                    e
                );
                UNKNOWN_LOCATION.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    fn geocoder(base_url: String) -> Geocoder {
        Geocoder::new(&GeocoderConfig {
            base_url,
            user_agent: "iss-overhead-test".into(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn search_returns_first_hit() {
        let app = Router::new().route(
            "/search",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                assert_eq!(q.get("format").map(String::as_str), Some("json"));
                assert_eq!(q.get("q").map(String::as_str), Some("Hong Kong"));
                Json(json!([
                    {"lat": "22.2793278", "lon": "114.1628131", "display_name": "Hong Kong"},
                    {"lat": "0", "lon": "0"}
                ]))
            }),
        );
        let geocoder = geocoder(spawn(app).await);

        let hit = geocoder.search("Hong Kong").await.unwrap();
        assert_eq!(hit, Some(Coordinate::new(22.2793278, 114.1628131)));
    }

    #[tokio::test]
    async fn search_without_hits_is_none() {
        let app = Router::new().route("/search", get(|| async { Json(json!([])) }));
        let geocoder = geocoder(spawn(app).await);
        assert_eq!(geocoder.search("nowhere at all").await.unwrap(), None);
    }

    #[tokio::test]
    async fn describe_reads_reverse_lookup() {
        let app = Router::new().route(
            "/reverse",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                assert_eq!(q.get("zoom").map(String::as_str), Some("3"));
                Json(json!({
                    "display_name": "Australia",
                    "address": {"country": "Australia", "country_code": "au"}
                }))
            }),
        );
        let geocoder = geocoder(spawn(app).await);
        assert_eq!(
            geocoder.describe(Coordinate::new(-25.0, 133.0)).await,
            "Australia"
        );
    }

    #[tokio::test]
    async fn describe_swallows_failures() {
        let app = Router::new().route(
            "/reverse",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "busy") }),
        );
        let geocoder = geocoder(spawn(app).await);
        assert_eq!(
            geocoder.describe(Coordinate::new(0.0, -30.0)).await,
            UNKNOWN_LOCATION
        );
    }

    #[tokio::test]
    async fn describe_handles_unable_to_geocode() {
        let app = Router::new().route(
            "/reverse",
            get(|| async { Json(json!({"error": "Unable to geocode"})) }),
        );
        let geocoder = geocoder(spawn(app).await);
        assert_eq!(
            geocoder.describe(Coordinate::new(0.0, -140.0)).await,
            UNKNOWN_LOCATION
        );
    }
}
