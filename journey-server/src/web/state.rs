//! Application state for the web layer.

use std::sync::Arc;

use crate::estimator::JourneyEstimator;
use crate::geocode::GeocodeProvider;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Journey estimator (also answers congestion queries)
    pub estimator: Arc<JourneyEstimator>,

    /// Location search
    pub geocoder: Arc<dyn GeocodeProvider>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(estimator: JourneyEstimator, geocoder: impl GeocodeProvider + 'static) -> Self {
        Self {
            estimator: Arc::new(estimator),
            geocoder: Arc::new(geocoder),
        }
    }
}
