//! Consistency checker: re-truncates estimates and compares them with the
//! original readings.
//!
//! A correct estimator reproduces the anchor's reading exactly; any other
//! category that comes back -1 or +1 was reconstructed outside its bucket.

use tracing::{debug, warn};
use crate::core::DurationReconstructor;
use crate::types::{CategoryRecords, CheckReport, Corroboration, EstimateError};

/// Validation oracle for the reconstructor
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsistencyChecker {
    reconstructor: DurationReconstructor,
}

impl ConsistencyChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare every reading with its floored estimate.
    ///
    /// Categories whose unit is not recognized are left out of the report.
    pub fn check(&self, records: &CategoryRecords) -> Result<CheckReport, EstimateError> {
        let estimates = self.reconstructor.estimate_all(records)?;
        let mut report = CheckReport::default();

        for (category, record) in records.iter() {
            let Some(unit) = record.time_unit() else {
                warn!(category, unit = %record.unit, "No comparable unit, skipping");
                continue;
            };
            let Some(estimate) = estimates.get(category) else {
                continue;
            };

            let recomputed = unit.count_in(estimate).floor() as u64;
            let verdict = Corroboration::compare(u64::from(record.reported_value), recomputed);
            debug!(category, reported = record.reported_value, recomputed, %verdict, "Checked");
            report.push(category, verdict);
        }

        Ok(report)
    }
}
