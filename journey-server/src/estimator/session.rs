//! Last-request-wins tracking for successive estimates.
//!
//! A caller (e.g. one browser form) may submit a new request before the
//! previous one resolves. Each request takes a ticket; only the holder of
//! the most recent ticket may commit its outcome.
//!
//! The HTTP surface is stateless and calls
//! [`JourneyEstimator::estimate`](super::JourneyEstimator::estimate)
//! directly. Sessions are for library callers that keep one estimate per
//! form or view, via
//! [`JourneyEstimator::estimate_in`](super::JourneyEstimator::estimate_in).

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use super::error::EstimateError;
use super::estimate::JourneyEstimate;

/// Observable state of a session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EstimateState {
    #[default]
    Idle,
    Computing,
    Succeeded(JourneyEstimate),
    Failed(EstimateError),
}

impl EstimateState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, EstimateState::Succeeded(_) | EstimateState::Failed(_))
    }
}

/// Identifies one request within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Holds the state of the latest request.
#[derive(Debug, Default)]
pub struct EstimateSession {
    latest: AtomicU64,
    state: RwLock<EstimateState>,
}

impl EstimateSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding any in flight.
    pub async fn begin(&self) -> RequestTicket {
        let mut state = self.state.write().await;
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        *state = EstimateState::Computing;
        RequestTicket(id)
    }

    /// Whether `ticket` belongs to the most recent request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Commit an outcome if `ticket` is still current.
    ///
    /// Returns `false` and leaves the state untouched for stale tickets.
    pub async fn finish(
        &self,
        ticket: RequestTicket,
        outcome: Result<JourneyEstimate, EstimateError>,
    ) -> bool {
        let mut state = self.state.write().await;
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, "discarding superseded estimate");
            return false;
        }

        *state = match outcome {
            Ok(estimate) => EstimateState::Succeeded(estimate),
            Err(e) => EstimateState::Failed(e),
        };
        true
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> EstimateState {
        self.state.read().await.clone()
    }
}
