//! Web layer for the journey time estimator.
//!
//! Provides HTTP endpoints for congestion queries, location search and
//! journey estimates.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
