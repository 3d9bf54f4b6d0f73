//! Estimated durations and consistency verdicts

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cmp::Ordering;
use std::time::Duration;

/// Continuous playtime estimate for one category
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatedCategoryRecord {
    pub category: String,
    pub duration_estimate: Duration,
}

impl EstimatedCategoryRecord {
    pub fn new(category: impl Into<String>, duration_estimate: Duration) -> Self {
        Self {
            category: category.into(),
            duration_estimate,
        }
    }

    /// Estimate as fractional milliseconds (the wire representation)
    pub fn millis(&self) -> f64 {
        self.duration_estimate.as_secs_f64() * 1000.0
    }
}

/// All estimates of one batch, in input order.
///
/// Serializes as a JSON object mapping category → milliseconds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Estimates {
    records: Vec<EstimatedCategoryRecord>,
}

impl Estimates {
    pub(crate) fn from_records(records: Vec<EstimatedCategoryRecord>) -> Self {
        Self { records }
    }

    pub fn get(&self, category: &str) -> Option<Duration> {
        self.records
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.duration_estimate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EstimatedCategoryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all estimates
    pub fn total(&self) -> Duration {
        self.records.iter().map(|r| r.duration_estimate).sum()
    }
}

impl Serialize for Estimates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.category, &record.millis())?;
        }
        map.end()
    }
}

/// How a reported reading compares to its re-truncated estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corroboration {
    /// Reported value is below the recomputed one
    Below,
    /// Reported value matches
    Exact,
    /// Reported value is above the recomputed one
    Above,
}

impl Corroboration {
    /// Compare a reported reading against the recomputed one
    pub fn compare(reported: u64, recomputed: u64) -> Self {
        match reported.cmp(&recomputed) {
            Ordering::Less => Corroboration::Below,
            Ordering::Equal => Corroboration::Exact,
            Ordering::Greater => Corroboration::Above,
        }
    }

    /// -1, 0 or +1
    pub fn as_i8(&self) -> i8 {
        match self {
            Corroboration::Below => -1,
            Corroboration::Exact => 0,
            Corroboration::Above => 1,
        }
    }
}

impl Serialize for Corroboration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

impl std::fmt::Display for Corroboration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Corroboration::Below => "-1",
            Corroboration::Exact => "0",
            Corroboration::Above => "+1",
        };
        write!(f, "{}", text)
    }
}

/// Per-category verdicts, in input order. Categories without a
/// recognizable unit are absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckReport {
    entries: Vec<(String, Corroboration)>,
}

impl CheckReport {
    pub(crate) fn push(&mut self, category: impl Into<String>, verdict: Corroboration) {
        self.entries.push((category.into(), verdict));
    }

    pub fn get(&self, category: &str) -> Option<Corroboration> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, verdict)| *verdict)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Corroboration)> {
        self.entries.iter().map(|(name, verdict)| (name.as_str(), *verdict))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every checked category round-trips exactly
    pub fn all_exact(&self) -> bool {
        self.entries.iter().all(|(_, v)| *v == Corroboration::Exact)
    }
}

impl Serialize for CheckReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, verdict) in &self.entries {
            map.serialize_entry(category, verdict)?;
        }
        map.end()
    }
}
