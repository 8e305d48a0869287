//! Server configuration.
//!
//! The only settings read from the environment are the provider base URLs;
//! everything else uses the per-component defaults.

use std::net::SocketAddr;

use crate::estimator::EstimatorConfig;
use crate::geocode::{GeocodingConfig, SearchCacheConfig};
use crate::routing::RoutingConfig;

/// Environment variable overriding the OSRM base URL.
pub const ROUTING_BASE_URL_VAR: &str = "ROUTING_BASE_URL";

/// Environment variable overriding the Nominatim base URL.
pub const GEOCODING_BASE_URL_VAR: &str = "GEOCODING_BASE_URL";

/// Errors in server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A base URL was set but is not an http(s) URL
    #[error("{var} must be an http:// or https:// URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Everything needed to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub routing: RoutingConfig,
    pub geocoding: GeocodingConfig,
    pub search_cache: SearchCacheConfig,
    pub estimator: EstimatorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            routing: RoutingConfig::default(),
            geocoding: GeocodingConfig::default(),
            search_cache: SearchCacheConfig::default(),
            estimator: EstimatorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Build from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = read_url(&lookup, ROUTING_BASE_URL_VAR)? {
            config.routing = config.routing.with_base_url(url);
        }
        if let Some(url) = read_url(&lookup, GEOCODING_BASE_URL_VAR)? {
            config.geocoding = config.geocoding.with_base_url(url);
        }

        Ok(config)
    }
}

fn read_url(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<String>, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl {
            var,
            value: value.to_string(),
        });
    }
    Ok(Some(value.trim_end_matches('/').to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.routing.base_url, crate::routing::DEFAULT_BASE_URL);
        assert_eq!(config.geocoding.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn overrides_base_urls() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ROUTING_BASE_URL_VAR, "http://localhost:5000/"),
            (GEOCODING_BASE_URL_VAR, "https://geo.example.org"),
        ]))
        .unwrap();
        assert_eq!(config.routing.base_url, "http://localhost:5000");
        assert_eq!(config.geocoding.base_url, "https://geo.example.org");
    }

    #[test]
    fn blank_variable_keeps_default() {
        let config = ServerConfig::from_lookup(lookup(&[(ROUTING_BASE_URL_VAR, "  ")])).unwrap();
        assert_eq!(config.routing.base_url, crate::routing::DEFAULT_BASE_URL);
    }

    #[test]
    fn rejects_non_http_url() {
        let err = ServerConfig::from_lookup(lookup(&[(GEOCODING_BASE_URL_VAR, "ftp://geo")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidUrl {
                var: GEOCODING_BASE_URL_VAR,
                value: "ftp://geo".into(),
            }
        );
    }
}
