//! Time sources for the traffic heuristic.

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Europe::London;

/// Source of the current local time in Great Britain.
pub trait Clock: Send + Sync {
    /// Current wall-clock time in UK local time (GMT/BST).
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock and converts it to `Europe/London`.
///
/// The conversion keeps rush hours aligned with UK roads regardless of the
/// host's configured time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&London).naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
