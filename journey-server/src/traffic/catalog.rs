//! Known congestion hotspots.

use std::collections::HashSet;

use crate::domain::{Coordinate, DomainError, Severity};

/// A fixed location known to suffer congestion.
#[derive(Debug, Clone, PartialEq)]
pub struct CongestionPoint {
    pub id: String,
    pub description: String,
    /// Baseline severity, independent of time of day
    pub severity: Severity,
    pub coordinate: Coordinate,
}

impl CongestionPoint {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            severity,
            coordinate,
        }
    }
}

/// An immutable, ordered set of congestion points with unique ids.
#[derive(Debug, Clone, Default)]
pub struct CongestionCatalog {
    points: Vec<CongestionPoint>,
}

impl CongestionCatalog {
    /// Build a catalog, preserving the given order.
    ///
    /// Fails if two points share an id.
    pub fn new(points: Vec<CongestionPoint>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for point in &points {
            if !seen.insert(point.id.as_str()) {
                return Err(DomainError::DuplicateCongestionPoint(point.id.clone()));
            }
        }
        Ok(Self { points })
    }

    /// Major M25 interchanges around London.
    pub fn great_britain() -> Result<Self, DomainError> {
        let points = [
            (
                "M25-J10",
                "M25 Junction 10 (A3 Interchange) - Common congestion point",
                Severity::Medium,
                51.3183,
                -0.4343,
            ),
            (
                "M25-J15",
                "M25 Junction 15 (M4 Interchange) - Regular delays",
                Severity::Medium,
                51.4972,
                -0.5594,
            ),
            (
                "M25-J21",
                "M25 Junction 21 (M1 Interchange) - Heavy traffic area",
                Severity::High,
                51.6767,
                -0.3854,
            ),
        ]
        .into_iter()
        .map(|(id, description, severity, lat, lon)| {
            Coordinate::new(lat, lon)
                .map(|coordinate| CongestionPoint::new(id, description, severity, coordinate))
        })
        .collect::<Result<Vec<_>, _>>()?;

        Self::new(points)
    }

    pub fn points(&self) -> &[CongestionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
