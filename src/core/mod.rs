//! Core modules for Playtime

pub mod reconstructor;
pub mod checker;
pub mod source;
pub mod validation;
pub mod config;
pub mod api;

pub use reconstructor::DurationReconstructor;
pub use checker::ConsistencyChecker;
pub use source::{RecordSource, FixtureSource};
pub use validation::{QueryParams, validate_query, is_valid_battletag};
pub use config::{ServiceConfig, QueryDefaults};
pub use api::{create_router, run_server, ApiError};
