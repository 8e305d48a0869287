//! Journey time estimator server.
//!
//! Answers "how long will this trip across Great Britain take?" for driving,
//! HGV, cycling and walking, combining a routing provider with a
//! time-of-day traffic model and known motorway congestion hotspots.

pub mod config;
pub mod domain;
pub mod estimator;
pub mod geocode;
pub mod routing;
pub mod traffic;
pub mod web;
