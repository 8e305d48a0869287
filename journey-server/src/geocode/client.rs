//! Nominatim search client.

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::GeocodedLocation;

use super::error::GeocodeError;
use super::provider::GeocodeProvider;
use super::types::NominatimPlace;

/// Default base URL for the public Nominatim instance.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// Base URL for the API
    pub base_url: String,
    /// ISO 3166-1 code results are restricted to
    pub country_code: String,
    /// Country name accepted when a result has no code
    pub country_name: String,
    /// Maximum results per query
    pub limit: u8,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Nominatim's usage policy requires an identifying User-Agent
    pub user_agent: String,
}

impl GeocodingConfig {
    /// Great Britain defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            country_code: "gb".to_string(),
            country_name: "United Kingdom".to_string(),
            limit: 5,
            timeout_secs: 30,
            user_agent: "JourneyTimeEstimator/1.0".to_string(),
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum results per query.
    pub fn with_limit(mut self, limit: u8) -> Self {
        self.limit = limit;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Nominatim search API.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    config: GeocodingConfig,
}

impl NominatimClient {
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|_| GeocodeError::Api {
            status: 0,
            message: "Invalid User-Agent format".to_string(),
        })?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-GB,en;q=0.9"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Search for places matching `query` within the configured country.
    ///
    /// A blank query returns no results without calling the API.
    pub async fn search_places(&self, query: &str) -> Result<Vec<GeocodedLocation>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let limit = self.config.limit.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("format", "json"),
                ("q", query),
                ("countrycodes", self.config.country_code.as_str()),
                ("limit", limit.as_str()),
                ("addressdetails", "1"),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        Ok(self.filter_places(places))
    }

    /// Keep places in the configured country with usable coordinates.
    fn filter_places(&self, places: Vec<NominatimPlace>) -> Vec<GeocodedLocation> {
        places
            .iter()
            .filter(|p| p.is_in_country(&self.config.country_code, &self.config.country_name))
            .filter_map(NominatimPlace::to_location)
            .collect()
    }
}

impl GeocodeProvider for NominatimClient {
    fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<GeocodedLocation>, GeocodeError>> {
        self.search_places(query).boxed()
    }
}
