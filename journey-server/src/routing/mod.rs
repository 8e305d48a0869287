//! Routing provider adapter.
//!
//! Wraps an OSRM route service. Each travel mode maps to an OSRM profile
//! (`driving`, `driving-hgv`, `cycling`, `walking`). Distances are converted
//! to miles; durations are only kept for motorized modes since human-powered
//! durations are computed from a fixed average speed instead.

mod client;
mod error;
mod mock;
mod provider;
mod types;

pub use client::{DEFAULT_BASE_URL, OsrmClient, RoutingConfig, meters_to_miles};
pub use error::RouteError;
pub use mock::{MockRoute, MockRouteProvider};
pub use provider::{RouteProvider, RouteResult};
pub use types::{OsrmGeometry, OsrmRoute, OsrmRouteResponse};
