//! Geographic coordinate types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A WGS84 latitude/longitude pair.
///
/// Latitude is always within `[-90, 90]` and longitude within `[-180, 180]`.
/// This type guarantees both by construction.
///
/// # Examples
///
/// ```
/// use journey_server::domain::Coordinate;
///
/// let westminster = Coordinate::new(51.4995, -0.1248).unwrap();
/// assert_eq!(westminster.lat(), 51.4995);
///
/// // Out of range is rejected
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinate {
                lat,
                lon,
                reason: "latitude must be between -90 and 90",
            });
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::InvalidCoordinate {
                lat,
                lon,
                reason: "longitude must be between -180 and 180",
            });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Wire form used when deserializing; validated on conversion.
#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lon: f64,
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawCoordinate::deserialize(deserializer)?;
        Coordinate::new(raw.lat, raw.lon).map_err(serde::de::Error::custom)
    }
}

/// An axis-aligned latitude/longitude rectangle.
///
/// Invariant: `min_lat <= max_lat` and `min_lon <= max_lon`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl BoundingBox {
    /// The smallest box containing both coordinates.
    ///
    /// Each axis is handled independently, so the argument order does not
    /// matter.
    pub fn spanning(a: &Coordinate, b: &Coordinate) -> Self {
        Self {
            min_lat: a.lat.min(b.lat),
            max_lat: a.lat.max(b.lat),
            min_lon: a.lon.min(b.lon),
            max_lon: a.lon.max(b.lon),
        }
    }

    /// Build a box from raw bounds as received from a query string.
    ///
    /// Bounds are not range-checked. Swapped bounds are reordered so the
    /// invariant still holds.
    pub fn from_bounds(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat: min_lat.min(max_lat),
            max_lat: min_lat.max(max_lat),
            min_lon: min_lon.min(max_lon),
            max_lon: min_lon.max(max_lon),
        }
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// Whether the coordinate lies inside the box. All four edges are inclusive.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.lat >= self.min_lat
            && coordinate.lat <= self.max_lat
            && coordinate.lon >= self.min_lon
            && coordinate.lon <= self.max_lon
    }
}
