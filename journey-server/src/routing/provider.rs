//! Routing provider abstraction.

use futures::future::BoxFuture;

use crate::domain::{Coordinate, TravelMode};

use super::error::RouteError;

/// Distance and duration for one origin/destination pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Route length in miles, rounded to one decimal place
    pub distance_miles: f64,

    /// Provider travel time in seconds. Only read for motorized modes.
    pub provider_duration_secs: Option<f64>,

    /// Route line, empty if the provider returned none
    pub geometry: Vec<Coordinate>,
}

impl RouteResult {
    pub fn new(distance_miles: f64, provider_duration_secs: Option<f64>) -> Self {
        Self {
            distance_miles,
            provider_duration_secs,
            geometry: Vec::new(),
        }
    }

    pub fn with_geometry(mut self, geometry: Vec<Coordinate>) -> Self {
        self.geometry = geometry;
        self
    }
}

/// Trait for fetching a route between two points.
///
/// This abstraction allows the estimator to be tested with mock routes.
pub trait RouteProvider: Send + Sync {
    /// Route from `origin` to `destination` using the profile for `mode`.
    fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> BoxFuture<'_, Result<RouteResult, RouteError>>;
}
