//! Estimator configuration.

use std::time::Duration;

/// Thresholds and limits for journey estimation.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Human-powered journeys longer than this (hours) are rejected.
    pub max_human_powered_hours: f64,

    /// Human-powered journeys longer than this (hours) get a breaks reminder.
    pub long_journey_hours: f64,

    /// Upper bound on a single routing provider call.
    pub route_timeout: Duration,
}

impl EstimatorConfig {
    pub fn new(
        max_human_powered_hours: f64,
        long_journey_hours: f64,
        route_timeout: Duration,
    ) -> Self {
        Self {
            max_human_powered_hours,
            long_journey_hours,
            route_timeout,
        }
    }

    /// Set the routing call timeout.
    pub fn with_route_timeout(mut self, timeout: Duration) -> Self {
        self.route_timeout = timeout;
        self
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            max_human_powered_hours: 8.0,
            long_journey_hours: 4.0,
            route_timeout: Duration::from_secs(20),
        }
    }
}
