//! Error taxonomy
//!
//! Estimation failures are terminal for a whole batch. An unparseable
//! reading is not an error at all: it travels as the zero sentinel record.

use thiserror::Error;

/// Batch-level estimation failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// No categories were supplied
    #[error("no categories to estimate")]
    EmptyInput,

    /// The anchor reports a zero percent, so nothing can be scaled against it
    #[error("anchor category '{category}' has a zero percent-of-total")]
    ZeroAnchorPercent { category: String },

    /// A negative or non-finite percent
    #[error("category '{category}' has an invalid percent-of-total: {percent}")]
    InvalidPercent { category: String, percent: f64 },

    /// The scaled estimate is too large for a `Duration`
    #[error("estimate for category '{category}' exceeds the representable duration range")]
    EstimateOverflow { category: String },
}

/// Record set construction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordsError {
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),
}

/// Failures raised by a record source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed source data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Records(#[from] RecordsError),
}

/// Request validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown queue: {0}")]
    UnknownQueue(String),

    #[error("invalid battle tag: {0}")]
    InvalidBattleTag(String),
}

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
}
