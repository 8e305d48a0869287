//! Time-of-day traffic prediction.
//!
//! A fixed timetable of weekday rush hours and busy periods. Weekends are
//! always treated as light traffic.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::domain::Severity;

const RUSH_HOUR_MULTIPLIER: f64 = 1.5;
const MODERATE_MULTIPLIER: f64 = 1.2;
const LIGHT_MULTIPLIER: f64 = 1.0;

/// Expected traffic conditions for a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficPrediction {
    /// Factor applied to a motorized base duration. Always >= 1.0.
    pub multiplier: f64,
    pub severity: Severity,
    pub description: String,
}

impl TrafficPrediction {
    fn new(multiplier: f64, severity: Severity, description: &str) -> Self {
        Self {
            multiplier,
            severity,
            description: description.to_string(),
        }
    }

    /// Whether the prediction adds any delay.
    pub fn adds_delay(&self) -> bool {
        self.multiplier > LIGHT_MULTIPLIER
    }
}

fn is_rush_hour(hour: u32) -> bool {
    (7..=9).contains(&hour) || (16..=18).contains(&hour)
}

fn is_moderate_hour(hour: u32) -> bool {
    (10..=15).contains(&hour) || (19..=21).contains(&hour)
}

/// Predict traffic for an hour of the day (0-23).
///
/// Bands are inclusive and checked rush hour first, so each hour falls in
/// exactly one band.
pub fn predict(hour: u32, is_weekend: bool) -> TrafficPrediction {
    if !is_weekend {
        if is_rush_hour(hour) {
            return TrafficPrediction::new(
                RUSH_HOUR_MULTIPLIER,
                Severity::High,
                "Rush hour traffic expected",
            );
        }
        if is_moderate_hour(hour) {
            return TrafficPrediction::new(
                MODERATE_MULTIPLIER,
                Severity::Medium,
                "Moderate traffic expected",
            );
        }
    }

    TrafficPrediction::new(LIGHT_MULTIPLIER, Severity::Low, "Light traffic expected")
}

/// Predict traffic for a local date and time.
pub fn predict_at(at: NaiveDateTime) -> TrafficPrediction {
    let is_weekend = matches!(at.weekday(), Weekday::Sat | Weekday::Sun);
    predict(at.hour(), is_weekend)
}
