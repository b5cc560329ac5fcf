use reqwest::{StatusCode, Url};
use serde_json::Value;

use super::allowlist::check_path;
use super::error::RelayError;
use crate::web::config::RelayConfig;

/// Query parameter carrying the server-held credential.
const API_KEY_PARAM: &str = "apiKey";

#[derive(Debug, Clone, PartialEq)]
pub enum RelayBody {
    Json(Value),
    Text(String),
}

impl RelayBody {
    /// JSON when the text parses as JSON, otherwise the raw text.
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => RelayBody::Json(value),
            Err(_) => RelayBody::Text(text),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub body: RelayBody,
}

/// Forwards allowlisted GET requests upstream, appending the credential last.
pub struct Relay {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl Relay {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("iss-overhead/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self, RelayError> {
        Self::new(config.upstream_url.clone(), config.api_key.clone())
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Builds the upstream URL: caller parameters in order, then the credential.
    pub fn upstream_url(&self, path: &str, query: &[(String, String)]) -> Result<Url, RelayError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| RelayError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| RelayError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(path.split('/'));

        if !query.is_empty() || self.api_key.is_some() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
            if let Some(api_key) = &self.api_key {
                pairs.append_pair(API_KEY_PARAM, api_key);
            }
        }

        Ok(url)
    }

    pub async fn forward(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<RelayResponse, RelayError> {
        let endpoint = check_path(path)?;
        let url = self.upstream_url(path, query)?;

        log::info!("Proxying {} request: {}", endpoint, path);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::warn!("Upstream returned {} for {}", status, path);
        }

        Ok(RelayResponse {
            status,
            body: RelayBody::from_text(text),
        })
    }
}
