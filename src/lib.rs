//! Playtime: precision recovery for truncated hero playtime readings
//!
//! Career profiles report each hero's playtime as a floored integer plus a
//! unit ("10 hours") alongside a precise percent-of-total. This crate turns
//! those readings into continuous duration estimates anchored on the hero
//! with the largest reported value.

pub mod core;
pub mod types;

// =============================================================================
// ESTIMATION [C]
// =============================================================================

/// Added to a floored reading to land on the middle of its bucket
pub const MIDPOINT_OFFSET: f64 = 0.5;

/// Unit lengths in seconds
pub const SECONDS_PER_SECOND: f64 = 1.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

// =============================================================================
// SERVICE [C]
// =============================================================================

/// Default API bind address
pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
