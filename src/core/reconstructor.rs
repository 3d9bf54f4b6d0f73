//! Duration reconstruction from truncated readings
//!
//! Profiles floor every reading to a whole unit, so "10 hours" means
//! somewhere in [10h, 11h). Percent-of-total is precise, so:
//! - the anchor is the hero with the largest reported value (smallest
//!   relative truncation error), first-seen on ties
//! - the anchor's bucket midpoint fixes absolute scale
//! - every hero is the anchor duration scaled by its percent ratio

use std::time::Duration;
use tracing::{debug, warn};
use crate::MIDPOINT_OFFSET;
use crate::types::{
    CategoryRecords, EstimateError, EstimatedCategoryRecord, Estimates, RawCategoryRecord, TimeUnit,
};

/// Turns raw readings into continuous estimates
#[derive(Debug, Default, Clone, Copy)]
pub struct DurationReconstructor;

impl DurationReconstructor {
    /// Create new reconstructor
    pub fn new() -> Self {
        Self
    }

    /// Midpoint estimate of a floored reading.
    ///
    /// Returns `(value + 0.5)` units; an empty or unknown unit yields zero.
    pub fn parse_bucket(&self, value: u32, unit: &str) -> Duration {
        match TimeUnit::from_label(unit) {
            Some(unit) => {
                Duration::from_secs_f64((f64::from(value) + MIDPOINT_OFFSET) * unit.seconds())
            }
            None => Duration::ZERO,
        }
    }

    /// The record with the maximum reported value, first-seen on ties
    pub fn select_anchor<'a>(
        &self,
        records: &'a CategoryRecords,
    ) -> Option<(&'a str, &'a RawCategoryRecord)> {
        // Iterator::max_by_key keeps the last maximum, so fold with a strict comparison.
        records.iter().fold(None::<(&str, &RawCategoryRecord)>, |best, candidate| match best {
            Some((_, current)) if candidate.1.reported_value <= current.reported_value => best,
            _ => Some(candidate),
        })
    }

    /// Estimate every category against the anchor
    pub fn estimate_all(&self, records: &CategoryRecords) -> Result<Estimates, EstimateError> {
        let (anchor_name, anchor) = self
            .select_anchor(records)
            .ok_or(EstimateError::EmptyInput)?;

        let anchor_percent = anchor.percent_of_total;
        if anchor_percent == 0.0 {
            return Err(EstimateError::ZeroAnchorPercent {
                category: anchor_name.to_string(),
            });
        }
        if !anchor_percent.is_finite() || anchor_percent < 0.0 {
            return Err(EstimateError::InvalidPercent {
                category: anchor_name.to_string(),
                percent: anchor_percent,
            });
        }

        let anchor_duration = self.parse_bucket(anchor.reported_value, &anchor.unit);
        let anchor_ms = anchor_duration.as_secs_f64() * 1000.0;
        debug!(
            anchor = anchor_name,
            reading = %anchor,
            anchor_ms,
            "Selected anchor"
        );

        let mut estimates = Vec::with_capacity(records.len());
        for (category, record) in records.iter() {
            if record.is_unparseable() {
                warn!(category, "Unparseable reading in source");
            }

            let percent = record.percent_of_total;
            if !percent.is_finite() || percent < 0.0 {
                return Err(EstimateError::InvalidPercent {
                    category: category.to_string(),
                    percent,
                });
            }

            let ratio = percent / anchor_percent;
            let scaled_ms = ratio * anchor_ms;
            let duration = Duration::try_from_secs_f64(scaled_ms / 1000.0).map_err(|_| {
                EstimateError::EstimateOverflow {
                    category: category.to_string(),
                }
            })?;

            debug!(category, ratio, scaled_ms, "Scaled estimate");
            estimates.push(EstimatedCategoryRecord::new(category, duration));
        }

        Ok(Estimates::from_records(estimates))
    }
}

// =============================================================================
// TESTS
// =============================================================================
