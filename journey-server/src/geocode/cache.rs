//! Caching layer for location search.
//!
//! Search-as-you-type sends the same prefixes repeatedly, and the public
//! Nominatim instance limits clients to one request per second. Successful
//! results are cached per normalized query; failures are not cached.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use moka::future::Cache as MokaCache;

use crate::domain::GeocodedLocation;

use super::error::GeocodeError;
use super::provider::GeocodeProvider;

type SearchEntry = Arc<Vec<GeocodedLocation>>;

/// Configuration for the search cache.
#[derive(Debug, Clone)]
pub struct SearchCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached queries.
    pub max_capacity: u64,
}

impl Default for SearchCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 1000,
        }
    }
}

/// Geocoder with caching.
///
/// Wraps any `GeocodeProvider` and caches its successful responses.
pub struct CachedGeocoder<P> {
    inner: P,
    cache: MokaCache<String, SearchEntry>,
}

impl<P: GeocodeProvider> CachedGeocoder<P> {
    pub fn new(inner: P, config: &SearchCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// Search, using the cache if available.
    pub async fn search_cached(&self, query: &str) -> Result<SearchEntry, GeocodeError> {
        let key = normalize(query);
        if key.is_empty() {
            return Ok(Arc::new(Vec::new()));
        }

        if let Some(cached) = self.cache.get(&key).await {
            tracing::trace!(query = %key, "search cache hit");
            return Ok(cached);
        }

        let locations = Arc::new(self.inner.search(&key).await?);
        self.cache.insert(key, locations.clone()).await;

        Ok(locations)
    }

    /// Access the underlying provider for operations that bypass cache.
    pub fn provider(&self) -> &P {
        &self.inner
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

impl<P: GeocodeProvider> GeocodeProvider for CachedGeocoder<P> {
    fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<GeocodedLocation>, GeocodeError>> {
        async move { self.search_cached(query).await.map(|entry| entry.as_ref().clone()) }.boxed()
    }
}

/// Cache key for a query: trimmed and lowercased.
fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}
