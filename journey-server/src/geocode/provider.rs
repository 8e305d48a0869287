//! Location search abstraction.

use futures::future::BoxFuture;

use crate::domain::GeocodedLocation;

use super::error::GeocodeError;

/// Trait for free-text location search.
pub trait GeocodeProvider: Send + Sync {
    /// Candidate locations for `query`, best match first.
    fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<GeocodedLocation>, GeocodeError>>;
}
