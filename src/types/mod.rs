//! Core types for Playtime

mod error;
mod unit;
mod record;
mod estimate;
mod query;

pub use error::{EstimateError, RecordsError, SourceError, QueryError, ConfigError};
pub use unit::TimeUnit;
pub use record::{RawCategoryRecord, CategoryRecords};
pub use estimate::{EstimatedCategoryRecord, Estimates, Corroboration, CheckReport};
pub use query::{PlayerQuery, Region, Platform, Queue, profile_path};
