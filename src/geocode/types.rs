use serde::Deserialize;

/// Subset of a Nominatim `/reverse` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReversePlace {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub ocean: Option<String>,
    #[serde(default)]
    pub sea: Option<String>,
}

/// One `/search` hit. Nominatim encodes coordinates as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub lat: String,
    pub lon: String,
}
