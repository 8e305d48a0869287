//! HTTP route handlers.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::domain::TravelMode;
use crate::estimator::EstimateError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/traffic", get(traffic))
        .route("/api/locations/search", get(search_locations))
        .route("/api/journey/estimate", post(estimate_journey))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Congestion hotspots inside a bounding box, with the current prediction.
async fn traffic(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<TrafficResponse> {
    let bbox = bounding_box_from_params(&params);
    let (prediction, events) = state.estimator.congestion_for(&bbox);

    Json(TrafficResponse {
        traffic_events: events.iter().map(TrafficEvent::from_point).collect(),
        prediction: PredictionResult::from_prediction(&prediction),
    })
}

/// Search locations by free text.
///
/// Geocoder failures are logged and answered with an empty list.
async fn search_locations(
    State(state): State<AppState>,
    Query(req): Query<LocationSearchRequest>,
) -> Json<LocationSearchResponse> {
    let locations = match state.geocoder.search(&req.q).await {
        Ok(found) => found.iter().map(LocationResult::from_location).collect(),
        Err(e) => {
            tracing::warn!(query = %req.q, error = %e, "location search failed");
            Vec::new()
        }
    };

    Json(LocationSearchResponse { locations })
}

/// Estimate journey time between two points.
async fn estimate_journey(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: EstimateRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(body = %String::from_utf8_lossy(&body), "rejected estimate request");
        AppError::BadRequest {
            message: format!("Invalid request: {e}"),
        }
    })?;

    let mode = match req.mode.as_deref() {
        Some(name) => name.parse::<TravelMode>().map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => TravelMode::default(),
    };

    let estimate = state
        .estimator
        .estimate(req.origin, req.destination, mode)
        .await?;

    Ok(Json(EstimateResponse::from_estimate(&estimate)).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Estimate(EstimateError),
}

impl From<EstimateError> for AppError {
    fn from(e: EstimateError) -> Self {
        AppError::Estimate(e)
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Estimate(EstimateError::DistanceTooFar(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Estimate(EstimateError::NoRouteFound) => StatusCode::NOT_FOUND,
            AppError::Estimate(EstimateError::RouteUnavailable(_)) => StatusCode::BAD_GATEWAY,
            AppError::Estimate(EstimateError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message } => {
                tracing::debug!(%status, %message, "bad request");
                message
            }
            // Already logged by the estimator
            AppError::Estimate(e) => e.user_message(),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use chrono::NaiveDate;
    use futures::FutureExt;
    use futures::future::BoxFuture;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::{Coordinate, GeocodedLocation};
    use crate::estimator::{EstimatorConfig, JourneyEstimator};
    use crate::geocode::{GeocodeError, GeocodeProvider};
    use crate::routing::{MockRoute, MockRouteProvider, RouteResult};
    use crate::traffic::{CongestionCatalog, CongestionQuery, FixedClock};

    struct StaticGeocoder(Result<Vec<GeocodedLocation>, u16>);

    impl GeocodeProvider for StaticGeocoder {
        fn search<'a>(
            &'a self,
            _query: &'a str,
        ) -> BoxFuture<'a, Result<Vec<GeocodedLocation>, GeocodeError>> {
            let result = match &self.0 {
                Ok(found) => Ok(found.clone()),
                Err(status) => Err(GeocodeError::Api {
                    status: *status,
                    message: "down".to_string(),
                }),
            };
            async move { result }.boxed()
        }
    }

    fn reading() -> GeocodedLocation {
        GeocodedLocation::new(
            "Reading, Berkshire, England, United Kingdom",
            Coordinate::new(51.4560, -0.9692).unwrap(),
            "town",
        )
    }

    fn app(routes: MockRouteProvider, geocoder: StaticGeocoder) -> Router {
        // Wednesday, 08:30
        let now = NaiveDate::from_ymd_opt(2024, 3, 13)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let estimator = JourneyEstimator::new(
            Arc::new(routes),
            CongestionQuery::new(Arc::new(CongestionCatalog::great_britain().unwrap())),
            Arc::new(FixedClock(now)),
            EstimatorConfig::default(),
        );
        create_router(AppState::new(estimator, geocoder))
    }

    fn default_app() -> Router {
        let routes = MockRouteProvider::new()
            .with_route(TravelMode::Car, RouteResult::new(30.0, Some(3600.0)))
            .with_route(TravelMode::Foot, RouteResult::new(40.0, None))
            .with_outcome(TravelMode::Truck, MockRoute::Unavailable { status: 503 });
        app(routes, StaticGeocoder(Ok(vec![reading()])))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const LONDON_TO_READING: &str = r#"{
        "origin": {"lat": 51.5074, "lon": -0.1278},
        "destination": {"lat": 51.4560, "lon": -0.9692}
    }"#;

    #[tokio::test]
    async fn health_says_ok() {
        let response = default_app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn traffic_returns_hotspots_in_box() {
        let (status, json) = send(
            default_app(),
            get_request("/api/traffic?minLat=51.2&maxLat=51.8&minLon=-0.7&maxLon=0.0"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let events = json["trafficEvents"].as_array().unwrap();
        assert_eq!(events.len(), 3);
        // Rush hour escalates every hotspot
        assert!(events.iter().all(|e| e["severity"] == "high"));
        assert_eq!(json["prediction"]["timeMultiplier"], 1.5);
    }

    #[tokio::test]
    async fn traffic_without_bounds_is_empty() {
        let (status, json) = send(default_app(), get_request("/api/traffic")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["trafficEvents"].as_array().unwrap().is_empty());
        assert_eq!(json["prediction"]["description"], "Rush hour traffic expected");
    }

    #[tokio::test]
    async fn location_search_maps_results() {
        let request = get_request("/api/locations/search?q=reading");
        let (status, json) = send(default_app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["locations"][0]["placeType"], "town");
        assert_eq!(json["locations"][0]["lat"], 51.456);
    }

    #[tokio::test]
    async fn location_search_returns_every_geocoder_result() {
        let many = (0..6).map(|_| reading()).collect();
        let app = app(MockRouteProvider::new(), StaticGeocoder(Ok(many)));

        // Unknown parameters are ignored; the geocoder alone caps results
        let request = get_request("/api/locations/search?q=reading&limit=1");
        let (status, json) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["locations"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn location_search_failure_is_empty_list() {
        let routes = MockRouteProvider::new();
        let app = app(routes, StaticGeocoder(Err(503)));

        let (status, json) = send(app, get_request("/api/locations/search?q=reading")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["locations"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn estimate_defaults_to_car() {
        let (status, json) = send(
            default_app(),
            post_json("/api/journey/estimate", LONDON_TO_READING),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["mode"], "car");
        // One hour at 1.5x rush hour
        assert_eq!(json["hours"], 1);
        assert_eq!(json["minutes"], 30);
        assert_eq!(json["distanceMiles"], 30.0);
        assert_eq!(json["prediction"]["timeMultiplier"], 1.5);
        assert!(
            json["estimate"]
                .as_str()
                .unwrap()
                .starts_with("Estimated driving time: 1h 30min (30 miles)")
        );
    }

    #[tokio::test]
    async fn estimate_too_far_to_walk_is_unprocessable() {
        let body = r#"{
            "origin": {"lat": 51.5074, "lon": -0.1278},
            "destination": {"lat": 51.4560, "lon": -0.9692},
            "mode": "walking"
        }"#;

        let (status, json) = send(default_app(), post_json("/api/journey/estimate", body)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json["error"],
            "This distance is too far to walk. Please choose cycling or driving instead."
        );
    }

    #[tokio::test]
    async fn estimate_without_route_is_not_found() {
        let body = r#"{
            "origin": {"lat": 51.5074, "lon": -0.1278},
            "destination": {"lat": 51.4560, "lon": -0.9692},
            "mode": "bicycle"
        }"#;

        let (status, json) = send(default_app(), post_json("/api/journey/estimate", body)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Error calculating time");
    }

    #[tokio::test]
    async fn estimate_provider_outage_is_bad_gateway() {
        let body = r#"{
            "origin": {"lat": 51.5074, "lon": -0.1278},
            "destination": {"lat": 51.4560, "lon": -0.9692},
            "mode": "truck"
        }"#;

        let (status, json) = send(default_app(), post_json("/api/journey/estimate", body)).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"], "Error calculating time");
    }

    #[tokio::test]
    async fn estimate_rejects_bad_input() {
        let unknown_mode = r#"{
            "origin": {"lat": 51.5074, "lon": -0.1278},
            "destination": {"lat": 51.4560, "lon": -0.9692},
            "mode": "hovercraft"
        }"#;
        let bad_coordinate = r#"{
            "origin": {"lat": 95.0, "lon": -0.1278},
            "destination": {"lat": 51.4560, "lon": -0.9692}
        }"#;

        for body in [unknown_mode, bad_coordinate, "{not json"] {
            let (status, json) =
                send(default_app(), post_json("/api/journey/estimate", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
            assert!(json["error"].is_string());
        }
    }
}
