//! OSRM HTTP client.
//!
//! Queries the OSRM route service and converts the first route into a
//! [`RouteResult`].

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::{Coordinate, TravelMode};

use super::error::RouteError;
use super::provider::{RouteProvider, RouteResult};
use super::types::{OsrmGeometry, OsrmRouteResponse};

/// Default base URL for the public OSRM demo server.
pub const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

const DEFAULT_USER_AGENT: &str = "JourneyTimeEstimator/1.0";

const METERS_TO_MILES: f64 = 0.000621371;

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// Base URL for the API (defaults to the OSRM demo server)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Value sent in the User-Agent header
    pub user_agent: String,
}

impl RoutingConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom base URL (for testing or a self-hosted OSRM).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// OSRM route service client.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    /// Create a new OSRM client with the given configuration.
    pub fn new(config: RoutingConfig) -> Result<Self, RouteError> {
        let mut headers = HeaderMap::new();
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| RouteError::Unavailable {
                status: 0,
                message: "Invalid User-Agent format".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the route URL (without query string) for a pair of points.
    ///
    /// OSRM takes coordinates as `lon,lat`.
    pub fn route_url(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        mode: TravelMode,
    ) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url,
            mode.profile().provider_profile,
            origin.lon(),
            origin.lat(),
            destination.lon(),
            destination.lat()
        )
    }

    /// Fetch the best route between two points.
    ///
    /// Returns `Unavailable` for non-success statuses and `NoRouteFound` when
    /// the provider answers but has no route for the pair.
    pub async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<RouteResult, RouteError> {
        let url = self.route_url(&origin, &destination, mode);
        tracing::debug!(%url, %mode, "requesting route");

        let response = self
            .http
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RouteError::Unavailable {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;
        parse_route_body(&body, mode)
    }
}

impl RouteProvider for OsrmClient {
    fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> BoxFuture<'_, Result<RouteResult, RouteError>> {
        self.route(origin, destination, mode).boxed()
    }
}

/// Convert meters to miles, rounded to one decimal place.
pub fn meters_to_miles(meters: f64) -> f64 {
    (meters * METERS_TO_MILES * 10.0).round() / 10.0
}

/// Parse a successful OSRM response body.
fn parse_route_body(body: &str, mode: TravelMode) -> Result<RouteResult, RouteError> {
    let response: OsrmRouteResponse = serde_json::from_str(body).map_err(|e| RouteError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })?;

    let route = response
        .routes
        .and_then(|routes| routes.into_iter().next())
        .ok_or(RouteError::NoRouteFound)?;

    let geometry = match route.geometry {
        Some(OsrmGeometry::GeoJson { coordinates }) => coordinates
            .into_iter()
            .filter_map(|[lon, lat]| Coordinate::new(lat, lon).ok())
            .collect(),
        Some(OsrmGeometry::Encoded(_)) | None => Vec::new(),
    };

    let provider_duration_secs = mode.is_motorized().then_some(route.duration);

    Ok(RouteResult::new(meters_to_miles(route.distance), provider_duration_secs)
        .with_geometry(geometry))
}
