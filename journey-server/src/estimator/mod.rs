//! Journey time estimation.
//!
//! Combines the routing provider's distance and duration with the
//! time-of-day traffic model to answer: "how long will this trip take by
//! this mode right now?"

mod config;
mod engine;
mod error;
mod estimate;
mod session;

pub use config::EstimatorConfig;
pub use engine::{JourneyEstimator, journey_hours};
pub use error::{EstimateError, GENERIC_FAILURE_MESSAGE};
pub use estimate::{JourneyDuration, JourneyEstimate, narrative};
pub use session::{EstimateSession, EstimateState, RequestTicket};
