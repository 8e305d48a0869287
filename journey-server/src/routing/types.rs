//! OSRM route service response types.
//!
//! Only the fields the estimator reads are modelled; serde ignores the rest.

use serde::Deserialize;

/// Top-level response from `/route/v1/{profile}/{coordinates}`.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmRouteResponse {
    /// Status code string, "Ok" on success
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub routes: Option<Vec<OsrmRoute>>,
}

/// A single route alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmRoute {
    /// Route length in meters
    pub distance: f64,

    /// Travel time in seconds
    pub duration: f64,

    #[serde(default)]
    pub geometry: Option<OsrmGeometry>,
}

/// Route geometry: GeoJSON when requested with `geometries=geojson`,
/// otherwise an encoded polyline.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OsrmGeometry {
    /// GeoJSON LineString, positions are `[lon, lat]`
    GeoJson { coordinates: Vec<[f64; 2]> },
    Encoded(String),
}
