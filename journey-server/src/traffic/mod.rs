//! Traffic model: congestion hotspots and time-of-day prediction.
//!
//! Predictions are computed fresh from the clock on every query. The
//! hotspot catalog is fixed at start-up and shared read-only.

mod catalog;
mod clock;
mod heuristic;
mod query;

pub use catalog::{CongestionCatalog, CongestionPoint};
pub use clock::{Clock, FixedClock, SystemClock};
pub use heuristic::{TrafficPrediction, predict, predict_at};
pub use query::CongestionQuery;
