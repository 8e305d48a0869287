//! Nominatim search response types.

use serde::Deserialize;

use crate::domain::{Coordinate, GeocodedLocation};

/// One result from `/search?format=json&addressdetails=1`.
///
/// Nominatim returns latitude and longitude as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    #[serde(rename = "type", default)]
    pub place_type: String,
    #[serde(default)]
    pub address: Option<NominatimAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NominatimAddress {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl NominatimPlace {
    /// Whether the address is in the given country.
    ///
    /// Matches on the ISO code, or on the country name for results that
    /// omit it.
    pub fn is_in_country(&self, country_code: &str, country_name: &str) -> bool {
        self.address.as_ref().is_some_and(|address| {
            address
                .country_code
                .as_deref()
                .is_some_and(|code| code.eq_ignore_ascii_case(country_code))
                || address.country.as_deref() == Some(country_name)
        })
    }

    /// Convert to a domain location, or `None` if the position is unusable.
    pub fn to_location(&self) -> Option<GeocodedLocation> {
        let lat = self.lat.trim().parse::<f64>().ok()?;
        let lon = self.lon.trim().parse::<f64>().ok()?;
        let coordinate = Coordinate::new(lat, lon).ok()?;
        Some(GeocodedLocation::new(
            self.display_name.clone(),
            coordinate,
            self.place_type.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(json: &str) -> NominatimPlace {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn converts_string_coordinates() {
        let p = place(
            r#"{"display_name": "Reading, England, United Kingdom", "lat": "51.4564", "lon": "-0.9700",
                "type": "city", "address": {"country": "United Kingdom", "country_code": "gb"}}"#,
        );
        let location = p.to_location().unwrap();
        assert_eq!(location.display_name, "Reading, England, United Kingdom");
        assert_eq!(location.coordinate.lat(), 51.4564);
        assert_eq!(location.coordinate.lon(), -0.97);
        assert_eq!(location.place_type, "city");
    }

    #[test]
    fn unparsable_coordinates_are_skipped() {
        let p = place(r#"{"display_name": "Nowhere", "lat": "north", "lon": "-0.97"}"#);
        assert!(p.to_location().is_none());
    }

    #[test]
    fn country_filter() {
        let by_code = place(
            r#"{"display_name": "A", "lat": "0", "lon": "0", "address": {"country_code": "gb"}}"#,
        );
        let by_name = place(
            r#"{"display_name": "B", "lat": "0", "lon": "0", "address": {"country": "United Kingdom"}}"#,
        );
        let elsewhere = place(
            r#"{"display_name": "C", "lat": "0", "lon": "0", "address": {"country": "Ireland", "country_code": "ie"}}"#,
        );
        let no_address = place(r#"{"display_name": "D", "lat": "0", "lon": "0"}"#);

        assert!(by_code.is_in_country("gb", "United Kingdom"));
        assert!(by_name.is_in_country("gb", "United Kingdom"));
        assert!(!elsewhere.is_in_country("gb", "United Kingdom"));
        assert!(!no_address.is_in_country("gb", "United Kingdom"));
    }
}
