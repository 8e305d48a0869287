//! Mock routing provider for testing without network access.
//!
//! Serves canned routes per travel mode and records every request.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::domain::{Coordinate, TravelMode};

use super::error::RouteError;
use super::provider::{RouteProvider, RouteResult};

/// Canned outcome for one travel mode.
#[derive(Debug, Clone)]
pub enum MockRoute {
    Found(RouteResult),
    Unavailable { status: u16 },
    NoRoute,
}

/// Mock provider keyed by travel mode.
///
/// Modes without a canned outcome answer `NoRouteFound`.
#[derive(Clone, Default)]
pub struct MockRouteProvider {
    routes: HashMap<TravelMode, MockRoute>,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<(Coordinate, Coordinate, TravelMode)>>>,
}

impl MockRouteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `mode` with a found route.
    pub fn with_route(mut self, mode: TravelMode, route: RouteResult) -> Self {
        self.routes.insert(mode, MockRoute::Found(route));
        self
    }

    /// Answer `mode` with the given outcome.
    pub fn with_outcome(mut self, mode: TravelMode, outcome: MockRoute) -> Self {
        self.routes.insert(mode, outcome);
        self
    }

    /// Sleep before answering each request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<(Coordinate, Coordinate, TravelMode)> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl RouteProvider for MockRouteProvider {
    fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> BoxFuture<'_, Result<RouteResult, RouteError>> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((origin, destination, mode));
        }
        let outcome = self.routes.get(&mode).cloned().unwrap_or(MockRoute::NoRoute);
        let delay = self.delay;

        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            match outcome {
                MockRoute::Found(route) => Ok(route),
                MockRoute::Unavailable { status } => Err(RouteError::Unavailable {
                    status,
                    message: "mock provider unavailable".to_string(),
                }),
                MockRoute::NoRoute => Err(RouteError::NoRouteFound),
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[tokio::test]
    async fn serves_canned_route() {
        let provider = MockRouteProvider::new()
            .with_route(TravelMode::Car, RouteResult::new(12.5, Some(900.0)));

        let route = provider
            .fetch_route(coord(51.5, -0.1), coord(51.6, -0.2), TravelMode::Car)
            .await
            .unwrap();
        assert_eq!(route.distance_miles, 12.5);
        assert_eq!(provider.requests().len(), 1);
        assert_eq!(provider.requests()[0].2, TravelMode::Car);
    }

    #[tokio::test]
    async fn unknown_mode_has_no_route() {
        let provider = MockRouteProvider::new();
        let result = provider
            .fetch_route(coord(51.5, -0.1), coord(51.6, -0.2), TravelMode::Foot)
            .await;
        assert!(matches!(result, Err(RouteError::NoRouteFound)));
    }

    #[tokio::test]
    async fn unavailable_outcome() {
        let provider = MockRouteProvider::new()
            .with_outcome(TravelMode::Truck, MockRoute::Unavailable { status: 502 });
        let result = provider
            .fetch_route(coord(51.5, -0.1), coord(51.6, -0.2), TravelMode::Truck)
            .await;
        assert!(matches!(
            result,
            Err(RouteError::Unavailable { status: 502, .. })
        ));
    }
}
