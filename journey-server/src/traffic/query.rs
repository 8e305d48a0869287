//! Congestion lookup for a route's bounding box.

use std::sync::Arc;

use crate::domain::{BoundingBox, Severity};

use super::catalog::{CongestionCatalog, CongestionPoint};
use super::heuristic::TrafficPrediction;

/// Multiplier above which every hotspot is reported as high severity.
const ESCALATION_THRESHOLD: f64 = 1.3;

/// Filters the catalog to a bounding box and overlays the current prediction.
#[derive(Debug, Clone)]
pub struct CongestionQuery {
    catalog: Arc<CongestionCatalog>,
}

impl CongestionQuery {
    pub fn new(catalog: Arc<CongestionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &CongestionCatalog {
        &self.catalog
    }

    /// Hotspots inside `bbox`, in catalog order, adjusted for `prediction`.
    ///
    /// Severity is raised to `High` when the multiplier exceeds the
    /// escalation threshold and never lowered. Each description gains the
    /// prediction's description as a second sentence.
    pub fn query_relevant(
        &self,
        bbox: &BoundingBox,
        prediction: &TrafficPrediction,
    ) -> Vec<CongestionPoint> {
        let escalate = prediction.multiplier > ESCALATION_THRESHOLD;

        self.catalog
            .points()
            .iter()
            .filter(|point| bbox.contains(&point.coordinate))
            .map(|point| CongestionPoint {
                id: point.id.clone(),
                description: format!("{}. {}", point.description, prediction.description),
                severity: if escalate {
                    Severity::High
                } else {
                    point.severity
                },
                coordinate: point.coordinate,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;
    use crate::traffic::heuristic::predict;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn fixture() -> CongestionQuery {
        let catalog = CongestionCatalog::new(vec![
            CongestionPoint::new("north", "North junction", Severity::Low, coord(52.0, -1.0)),
            CongestionPoint::new("mid", "Mid junction", Severity::Medium, coord(51.5, -0.5)),
            CongestionPoint::new("south", "South junction", Severity::High, coord(51.0, 0.0)),
            CongestionPoint::new("far", "Far junction", Severity::Low, coord(55.0, -3.0)),
        ])
        .unwrap();
        CongestionQuery::new(Arc::new(catalog))
    }

    fn prediction(multiplier: f64) -> TrafficPrediction {
        TrafficPrediction {
            multiplier,
            severity: Severity::Medium,
            description: "Test traffic".to_string(),
        }
    }

    #[test]
    fn keeps_catalog_order_and_inclusive_edges() {
        let query = fixture();
        let bbox = BoundingBox::from_bounds(51.0, 52.0, -1.0, 0.0);

        let ids: Vec<_> = query
            .query_relevant(&bbox, &predict(3, false))
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["north", "mid", "south"]);
    }

    #[test]
    fn point_exactly_on_min_lat_is_included() {
        let query = fixture();
        let bbox = BoundingBox::from_bounds(51.5, 51.7, -0.6, -0.4);
        let found = query.query_relevant(&bbox, &predict(3, false));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "mid");
    }

    #[test]
    fn appends_prediction_description() {
        let query = fixture();
        let bbox = BoundingBox::from_bounds(51.4, 51.6, -0.6, -0.4);
        let found = query.query_relevant(&bbox, &predict(8, false));
        assert_eq!(
            found[0].description,
            "Mid junction. Rush hour traffic expected"
        );
    }

    #[test]
    fn escalates_above_threshold() {
        let query = fixture();
        let bbox = BoundingBox::from_bounds(50.0, 53.0, -2.0, 1.0);

        let found = query.query_relevant(&bbox, &prediction(1.5));
        assert!(found.iter().all(|p| p.severity == Severity::High));
    }

    #[test]
    fn moderate_multiplier_does_not_escalate() {
        let query = fixture();
        let bbox = BoundingBox::from_bounds(50.0, 53.0, -2.0, 1.0);

        let severities: Vec<_> = query
            .query_relevant(&bbox, &prediction(1.2))
            .into_iter()
            .map(|p| p.severity)
            .collect();
        assert_eq!(
            severities,
            [Severity::Low, Severity::Medium, Severity::High]
        );

        // Exactly at the threshold is not above it
        let at_threshold = query.query_relevant(&bbox, &prediction(1.3));
        assert_eq!(at_threshold[0].severity, Severity::Low);
    }

    #[test]
    fn catalog_is_not_mutated() {
        let query = fixture();
        let bbox = BoundingBox::from_bounds(50.0, 56.0, -4.0, 1.0);
        let _ = query.query_relevant(&bbox, &prediction(1.5));

        assert_eq!(query.catalog().points()[0].severity, Severity::Low);
        assert_eq!(query.catalog().points()[0].description, "North junction");
    }

    #[test]
    fn zero_box_matches_nothing_in_britain() {
        let query = CongestionQuery::new(Arc::new(CongestionCatalog::great_britain().unwrap()));
        let bbox = BoundingBox::from_bounds(0.0, 0.0, 0.0, 0.0);
        assert!(query.query_relevant(&bbox, &predict(8, false)).is_empty());
    }
}
