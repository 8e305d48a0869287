//! Data transfer objects for web requests and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{BoundingBox, Coordinate, GeocodedLocation, Severity, TravelMode};
use crate::estimator::JourneyEstimate;
use crate::traffic::{CongestionPoint, TrafficPrediction};

/// Read one bounding-box bound from query parameters.
///
/// Absent, unparsable or non-finite values are treated as 0.
fn bound(params: &HashMap<String, String>, key: &str) -> f64 {
    params
        .get(key)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Bounding box from `minLat`, `maxLat`, `minLon` and `maxLon` parameters.
pub fn bounding_box_from_params(params: &HashMap<String, String>) -> BoundingBox {
    BoundingBox::from_bounds(
        bound(params, "minLat"),
        bound(params, "maxLat"),
        bound(params, "minLon"),
        bound(params, "maxLon"),
    )
}

/// A congestion hotspot with the current prediction applied.
#[derive(Debug, Serialize)]
pub struct TrafficEvent {
    pub id: String,
    pub description: String,
    pub severity: Severity,
    pub coordinates: Coordinate,
}

impl TrafficEvent {
    pub fn from_point(point: &CongestionPoint) -> Self {
        Self {
            id: point.id.clone(),
            description: point.description.clone(),
            severity: point.severity,
            coordinates: point.coordinate,
        }
    }
}

/// Traffic prediction as sent to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub time_multiplier: f64,
    pub description: String,
}

impl PredictionResult {
    pub fn from_prediction(prediction: &TrafficPrediction) -> Self {
        Self {
            time_multiplier: prediction.multiplier,
            description: prediction.description.clone(),
        }
    }
}

/// Response for the congestion query endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficResponse {
    pub traffic_events: Vec<TrafficEvent>,
    pub prediction: PredictionResult,
}

/// Request to search for locations.
#[derive(Debug, Deserialize)]
pub struct LocationSearchRequest {
    /// Free-text query
    #[serde(default)]
    pub q: String,
}

/// A location in search results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResult {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,
    pub place_type: String,
}

impl LocationResult {
    pub fn from_location(location: &GeocodedLocation) -> Self {
        Self {
            display_name: location.display_name.clone(),
            lat: location.coordinate.lat(),
            lon: location.coordinate.lon(),
            place_type: location.place_type.clone(),
        }
    }
}

/// Response for location search.
#[derive(Debug, Serialize)]
pub struct LocationSearchResponse {
    pub locations: Vec<LocationResult>,
}

/// Request to estimate a journey.
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,

    /// Travel mode name (defaults to car)
    pub mode: Option<String>,
}

/// A successful estimate.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub mode: TravelMode,
    pub hours: u32,
    pub minutes: u32,
    pub distance_miles: f64,

    /// Human-readable estimate line
    pub estimate: String,

    pub prediction: PredictionResult,
    pub traffic_events: Vec<TrafficEvent>,

    /// Route line for map display
    pub geometry: Vec<Coordinate>,
}

impl EstimateResponse {
    pub fn from_estimate(estimate: &JourneyEstimate) -> Self {
        Self {
            mode: estimate.mode,
            hours: estimate.hours,
            minutes: estimate.minutes,
            distance_miles: estimate.distance_miles,
            estimate: estimate.narrative.clone(),
            prediction: PredictionResult::from_prediction(&estimate.prediction),
            traffic_events: estimate
                .advisory_events
                .iter()
                .map(TrafficEvent::from_point)
                .collect(),
            geometry: estimate.geometry.clone(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
