//! Journey estimates and their human-readable form.

use std::fmt;

use crate::domain::{Coordinate, TravelMode};
use crate::traffic::{CongestionPoint, TrafficPrediction};

/// A travel time split into whole hours and minutes.
///
/// Minutes are always in `0..60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl JourneyDuration {
    /// Split fractional hours into hours and rounded minutes.
    ///
    /// A remainder that rounds to 60 minutes carries into the hours.
    /// Returns `None` for negative or non-finite input, or when the hours
    /// do not fit in a `u32`.
    pub fn from_hours(hours: f64) -> Option<Self> {
        if !hours.is_finite() || hours < 0.0 || hours >= f64::from(u32::MAX) {
            return None;
        }

        let whole = hours.floor();
        let minutes = ((hours - whole) * 60.0).round() as u32;
        let whole = whole as u32;

        Some(if minutes >= 60 {
            Self {
                hours: whole.checked_add(1)?,
                minutes: 0,
            }
        } else {
            Self {
                hours: whole,
                minutes,
            }
        })
    }
}

impl fmt::Display for JourneyDuration {
    /// `"1h 5min"`, or just `"5min"` under an hour.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{}h ", self.hours)?;
        }
        write!(f, "{}min", self.minutes)
    }
}

/// The result of one successful estimation request.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyEstimate {
    pub mode: TravelMode,
    pub hours: u32,
    pub minutes: u32,
    pub distance_miles: f64,
    /// Hotspots inside the route's bounding box, with the prediction overlaid
    pub advisory_events: Vec<CongestionPoint>,
    pub narrative: String,
    pub prediction: TrafficPrediction,
    pub geometry: Vec<Coordinate>,
}

impl JourneyEstimate {
    pub fn duration(&self) -> JourneyDuration {
        JourneyDuration {
            hours: self.hours,
            minutes: self.minutes,
        }
    }
}

/// Compose the one-line estimate text.
///
/// The traffic clause only appears for motorized modes when the multiplier
/// adds delay; the breaks reminder only for long human-powered journeys.
pub fn narrative(
    mode: TravelMode,
    duration: JourneyDuration,
    distance_miles: f64,
    prediction: &TrafficPrediction,
    long_journey: bool,
) -> String {
    let profile = mode.profile();
    let mut text = format!(
        "Estimated {} time: {} ({} miles)",
        profile.verb, duration, distance_miles
    );

    if profile.uses_traffic && prediction.adds_delay() {
        text.push_str(" - Including ");
        text.push_str(&prediction.description.to_lowercase());
    }

    if mode.is_human_powered() && long_journey {
        text.push_str(" - Long journey, consider taking breaks");
    }

    text
}
