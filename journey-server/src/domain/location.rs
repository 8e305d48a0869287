//! Geocoded locations.

use super::Coordinate;

/// A place resolved from a free-text search.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    /// Full human-readable name (e.g. "Reading, Berkshire, England, United Kingdom")
    pub display_name: String,
    pub coordinate: Coordinate,
    /// Geocoder's place classification (e.g. "city", "house")
    pub place_type: String,
}

impl GeocodedLocation {
    pub fn new(
        display_name: impl Into<String>,
        coordinate: Coordinate,
        place_type: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            coordinate,
            place_type: place_type.into(),
        }
    }
}
