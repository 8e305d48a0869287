//! Domain types for the journey time estimator.
//!
//! This module contains the core value types shared by the traffic model,
//! the routing adapter and the estimator. Types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod coordinate;
mod error;
mod location;
mod mode;
mod severity;

pub use coordinate::{BoundingBox, Coordinate};
pub use error::DomainError;
pub use location::GeocodedLocation;
pub use mode::{ModeProfile, TravelMode};
pub use severity::Severity;
