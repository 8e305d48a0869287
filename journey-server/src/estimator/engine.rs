//! The estimation pipeline.
//!
//! For one origin/destination pair and travel mode:
//!
//! 1. Derive the bounding box spanning both endpoints.
//! 2. Predict traffic from the clock.
//! 3. Collect congestion hotspots inside the box (informational only).
//! 4. Fetch the route from the provider.
//! 5. Compute hours: provider duration × multiplier for motorized modes,
//!    distance ÷ average speed for human-powered ones.
//! 6. Split into hours and minutes and compose the narrative.

use std::sync::Arc;

use crate::domain::{BoundingBox, Coordinate, TravelMode};
use crate::routing::{RouteProvider, RouteResult};
use crate::traffic::{Clock, CongestionPoint, CongestionQuery, TrafficPrediction, predict_at};

use super::config::EstimatorConfig;
use super::error::EstimateError;
use super::estimate::{JourneyDuration, JourneyEstimate, narrative};
use super::session::EstimateSession;

/// Orchestrates traffic, congestion and routing into one estimate.
#[derive(Clone)]
pub struct JourneyEstimator {
    routes: Arc<dyn RouteProvider>,
    congestion: CongestionQuery,
    clock: Arc<dyn Clock>,
    config: EstimatorConfig,
}

impl JourneyEstimator {
    pub fn new(
        routes: Arc<dyn RouteProvider>,
        congestion: CongestionQuery,
        clock: Arc<dyn Clock>,
        config: EstimatorConfig,
    ) -> Self {
        Self {
            routes,
            congestion,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Traffic prediction for the current time.
    pub fn current_prediction(&self) -> TrafficPrediction {
        predict_at(self.clock.now())
    }

    /// Hotspots relevant to a bounding box under the current prediction.
    pub fn congestion_for(&self, bbox: &BoundingBox) -> (TrafficPrediction, Vec<CongestionPoint>) {
        let prediction = self.current_prediction();
        let events = self.congestion.query_relevant(bbox, &prediction);
        (prediction, events)
    }

    /// Estimate journey time between two points.
    ///
    /// Failures are logged here; callers only need to show
    /// [`EstimateError::user_message`].
    pub async fn estimate(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<JourneyEstimate, EstimateError> {
        let outcome = self.compute(origin, destination, mode).await;

        match &outcome {
            Ok(estimate) => tracing::debug!(
                %mode,
                hours = estimate.hours,
                minutes = estimate.minutes,
                distance_miles = estimate.distance_miles,
                "estimate computed"
            ),
            Err(e) if e.is_unexpected() => {
                tracing::error!(%origin, %destination, %mode, error = %e, "estimation failed")
            }
            Err(e) => {
                tracing::warn!(%origin, %destination, %mode, error = %e, "estimation failed")
            }
        }

        outcome
    }

    /// Run an estimate as the latest request of `session`.
    ///
    /// Returns `true` if the outcome was committed, `false` if a newer
    /// request started in the meantime and this result was discarded.
    pub async fn estimate_in(
        &self,
        session: &EstimateSession,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> bool {
        let ticket = session.begin().await;
        let outcome = self.estimate(origin, destination, mode).await;
        session.finish(ticket, outcome).await
    }

    async fn compute(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<JourneyEstimate, EstimateError> {
        let bbox = BoundingBox::spanning(&origin, &destination);
        let (prediction, advisory_events) = self.congestion_for(&bbox);
        tracing::debug!(
            multiplier = prediction.multiplier,
            events = advisory_events.len(),
            "traffic prediction"
        );

        let route = tokio::time::timeout(
            self.config.route_timeout,
            self.routes.fetch_route(origin, destination, mode),
        )
        .await
        .map_err(|_| {
            EstimateError::RouteUnavailable(format!(
                "routing provider timed out after {:?}",
                self.config.route_timeout
            ))
        })??;

        let hours = journey_hours(mode, &route, &prediction)?;

        if mode.is_human_powered() && hours > self.config.max_human_powered_hours {
            return Err(EstimateError::DistanceTooFar(mode));
        }

        let duration = JourneyDuration::from_hours(hours).ok_or_else(|| {
            EstimateError::Unexpected(format!("invalid journey duration: {hours} hours"))
        })?;
        let long_journey = hours > self.config.long_journey_hours;

        Ok(JourneyEstimate {
            mode,
            hours: duration.hours,
            minutes: duration.minutes,
            distance_miles: route.distance_miles,
            narrative: narrative(mode, duration, route.distance_miles, &prediction, long_journey),
            advisory_events,
            prediction,
            geometry: route.geometry,
        })
    }
}

/// Journey time in fractional hours for a mode.
///
/// Motorized: provider seconds / 3600 × traffic multiplier. Human-powered:
/// distance / the mode's average speed, ignoring traffic.
pub fn journey_hours(
    mode: TravelMode,
    route: &RouteResult,
    prediction: &TrafficPrediction,
) -> Result<f64, EstimateError> {
    let profile = mode.profile();

    let hours = match profile.average_speed_mph {
        Some(speed) => route.distance_miles / speed,
        None => {
            let secs = route.provider_duration_secs.ok_or_else(|| {
                EstimateError::Unexpected(format!("provider returned no duration for {mode}"))
            })?;
            let base = secs / 3600.0;
            if profile.uses_traffic {
                base * prediction.multiplier
            } else {
                base
            }
        }
    };

    if !hours.is_finite() || hours < 0.0 {
        return Err(EstimateError::Unexpected(format!(
            "invalid journey duration: {hours} hours"
        )));
    }

    Ok(hours)
}
