//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from provider/IO errors.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude or longitude outside its valid range, or not finite
    #[error("invalid coordinate ({lat}, {lon}): {reason}")]
    InvalidCoordinate {
        lat: f64,
        lon: f64,
        reason: &'static str,
    },

    /// Travel mode name not recognised
    #[error("unknown travel mode: {0}")]
    UnknownTravelMode(String),

    /// Two congestion points share an id
    #[error("duplicate congestion point id: {0}")]
    DuplicateCongestionPoint(String),
}
