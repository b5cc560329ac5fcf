use serde::{Deserialize, Deserializer};
use std::time::Duration;
use thiserror::Error;

use crate::coordinate::Coordinate;

pub const API_KEY_ENV: &str = "N2YO_API_KEY";
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub tracking: TrackingConfig,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Initial map centre, `"lat, lon"`.
    #[serde(default = "default_location")]
    pub default_location: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            default_location: default_location(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_location() -> String {
    "22.28552, 114.15769".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,
    /// Usually supplied through `N2YO_API_KEY` rather than the file.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_url: default_upstream_url(),
            api_key: None,
        }
    }
}

fn default_upstream_url() -> String {
    "https://api.n2yo.com/rest/v1".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackingConfig {
    #[serde(default = "default_norad_id")]
    pub norad_id: u32,
    #[serde(default)]
    pub observer_altitude_m: f64,
    #[serde(
        default = "default_trajectory_window",
        deserialize_with = "deserialize_duration"
    )]
    pub trajectory_window: Duration,
    #[serde(default = "default_pass_days")]
    pub pass_days: u32,
    #[serde(default = "default_min_visibility_s")]
    pub min_visibility_s: u32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            norad_id: default_norad_id(),
            observer_altitude_m: 0.0,
            trajectory_window: default_trajectory_window(),
            pass_days: default_pass_days(),
            min_visibility_s: default_min_visibility_s(),
        }
    }
}

fn default_norad_id() -> u32 {
    25544
}

// Roughly one ISS orbit.
fn default_trajectory_window() -> Duration {
    Duration::from_secs(93 * 60)
}

fn default_pass_days() -> u32 {
    10
}

fn default_min_visibility_s() -> u32 {
    300
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderConfig {
    #[serde(default = "default_geocoder_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_url(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_geocoder_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    format!("iss-overhead/{}", env!("CARGO_PKG_VERSION"))
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Reads the optional config file, then applies process environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.relay.api_key = Some(key.trim().to_string());
        }

        if let Some(port) = lookup(PORT_ENV) {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            let host = self
                .web
                .bind
                .rsplit_once(':')
                .map(|(host, _)| host)
                .unwrap_or("0.0.0.0");
            self.web.bind = format!("{}:{}", host, port);
        }

        Ok(())
    }

    pub fn default_location(&self) -> Coordinate {
        Coordinate::from_coordinates(&self.web.default_location).unwrap_or_default()
    }
}
