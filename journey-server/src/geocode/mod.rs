//! Free-text location search.
//!
//! Resolves user-typed addresses to coordinates via Nominatim, restricted to
//! Great Britain. Results are cached in memory for an hour.

mod cache;
mod client;
mod error;
mod provider;
mod types;

pub use cache::{CachedGeocoder, SearchCacheConfig};
pub use client::{GeocodingConfig, NominatimClient};
pub use error::GeocodeError;
pub use provider::GeocodeProvider;
pub use types::{NominatimAddress, NominatimPlace};
