//! Estimation failure taxonomy.

use crate::domain::TravelMode;
use crate::routing::RouteError;

/// Message shown for any failure that is not the traveller's choice of mode.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error calculating time";

/// Why an estimate could not be produced.
///
/// None of these are retried; the caller may resubmit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    /// Routing provider unreachable, timed out, or returned an error status
    #[error("route unavailable: {0}")]
    RouteUnavailable(String),

    /// Provider answered but has no route between the points
    #[error("no route found")]
    NoRouteFound,

    /// Journey would take too long for a human-powered mode
    #[error("distance too far for {0}")]
    DistanceTooFar(TravelMode),

    /// Anything else (malformed provider data, non-finite durations, ...)
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl EstimateError {
    /// The single sentence shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            EstimateError::DistanceTooFar(TravelMode::Foot) => {
                "This distance is too far to walk. Please choose cycling or driving instead."
                    .to_string()
            }
            EstimateError::DistanceTooFar(TravelMode::Bicycle) => {
                "This distance is too far to cycle. Please choose driving instead.".to_string()
            }
            EstimateError::DistanceTooFar(mode) => {
                format!("This distance is too far for {}.", mode.profile().verb)
            }
            EstimateError::RouteUnavailable(_)
            | EstimateError::NoRouteFound
            | EstimateError::Unexpected(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Whether this is a fault rather than an unsuitable request.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, EstimateError::Unexpected(_))
    }
}

impl From<RouteError> for EstimateError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::NoRouteFound => EstimateError::NoRouteFound,
            RouteError::Http(_) | RouteError::Unavailable { .. } => {
                EstimateError::RouteUnavailable(e.to_string())
            }
            RouteError::Json { .. } => EstimateError::Unexpected(e.to_string()),
        }
    }
}
