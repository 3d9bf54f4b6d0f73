//! Time units as they appear on career profiles

use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::{SECONDS_PER_SECOND, SECONDS_PER_MINUTE, SECONDS_PER_HOUR};

/// The three units a profile reports playtime in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
}

impl TimeUnit {
    /// Resolve a unit label by case-insensitive prefix.
    ///
    /// "seconds", "Minute", "HOURS" and even a bare "h" all resolve;
    /// an empty or unknown label yields `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.chars().next()?.to_ascii_lowercase() {
            's' => Some(TimeUnit::Second),
            'm' => Some(TimeUnit::Minute),
            'h' => Some(TimeUnit::Hour),
            _ => None,
        }
    }

    /// Length of one unit in seconds
    pub fn seconds(&self) -> f64 {
        match self {
            TimeUnit::Second => SECONDS_PER_SECOND,
            TimeUnit::Minute => SECONDS_PER_MINUTE,
            TimeUnit::Hour => SECONDS_PER_HOUR,
        }
    }

    /// Express a duration as a (fractional) count of this unit
    pub fn count_in(&self, duration: Duration) -> f64 {
        duration.as_secs_f64() / self.seconds()
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimeUnit::Second => "seconds",
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour => "hours",
        };
        write!(f, "{}", name)
    }
}
