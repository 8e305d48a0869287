//! Travel modes and their per-mode estimation parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// How the traveller gets from origin to destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Car,
    Truck,
    Bicycle,
    Foot,
}

/// Per-mode estimation parameters.
///
/// Motorized modes take their duration from the routing provider and scale
/// it by the traffic multiplier. Human-powered modes ignore the provider's
/// duration and divide distance by a fixed average speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeProfile {
    /// Routing provider profile name (e.g. "driving-hgv").
    pub provider_profile: &'static str,
    /// Fixed average speed for human-powered modes.
    pub average_speed_mph: Option<f64>,
    /// Verb used in the estimate narrative.
    pub verb: &'static str,
    /// Whether the traffic multiplier applies.
    pub uses_traffic: bool,
}

const CAR: ModeProfile = ModeProfile {
    provider_profile: "driving",
    average_speed_mph: None,
    verb: "driving",
    uses_traffic: true,
};

const TRUCK: ModeProfile = ModeProfile {
    provider_profile: "driving-hgv",
    average_speed_mph: None,
    verb: "HGV driving",
    uses_traffic: true,
};

const BICYCLE: ModeProfile = ModeProfile {
    provider_profile: "cycling",
    average_speed_mph: Some(12.0),
    verb: "cycling",
    uses_traffic: false,
};

const FOOT: ModeProfile = ModeProfile {
    provider_profile: "walking",
    average_speed_mph: Some(3.1),
    verb: "walking",
    uses_traffic: false,
};

impl TravelMode {
    /// All modes, in display order.
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Car,
        TravelMode::Truck,
        TravelMode::Bicycle,
        TravelMode::Foot,
    ];

    /// The estimation parameters for this mode.
    pub const fn profile(self) -> &'static ModeProfile {
        match self {
            TravelMode::Car => &CAR,
            TravelMode::Truck => &TRUCK,
            TravelMode::Bicycle => &BICYCLE,
            TravelMode::Foot => &FOOT,
        }
    }

    pub const fn is_motorized(self) -> bool {
        matches!(self, TravelMode::Car | TravelMode::Truck)
    }

    pub const fn is_human_powered(self) -> bool {
        !self.is_motorized()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Car => "car",
            TravelMode::Truck => "truck",
            TravelMode::Bicycle => "bicycle",
            TravelMode::Foot => "foot",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    /// Parse a mode name, case-insensitively. Provider-style names
    /// ("driving", "walking", ...) are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" | "driving" => Ok(TravelMode::Car),
            "truck" | "hgv" | "driving-hgv" => Ok(TravelMode::Truck),
            "bicycle" | "bike" | "cycling" => Ok(TravelMode::Bicycle),
            "foot" | "walk" | "walking" => Ok(TravelMode::Foot),
            _ => Err(DomainError::UnknownTravelMode(s.to_string())),
        }
    }
}
