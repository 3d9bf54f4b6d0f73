//! Request validation
//!
//! Region, platform and queue must come from fixed sets. PC battle tags
//! must look like `Name#1234`: a non-digit first character, 2-11 more,
//! a `#` or `-`, then 4-5 digits.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use crate::core::QueryDefaults;
use crate::types::{Platform, PlayerQuery, QueryError};

lazy_static! {
    static ref RE_BATTLETAG: Regex = Regex::new(
        r"^[^\d#][^#]{2,11}[#-][0-9]{4,5}$"
    ).unwrap();
}

/// Unvalidated request parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryParams {
    pub battletag: Option<String>,
    pub region: Option<String>,
    pub platform: Option<String>,
    pub queue: Option<String>,
}

/// Does this look like a PC battle tag?
pub fn is_valid_battletag(tag: &str) -> bool {
    RE_BATTLETAG.is_match(tag)
}

/// Turn raw parameters into a query, filling gaps from `defaults`
pub fn validate_query(
    params: &QueryParams,
    defaults: &QueryDefaults,
) -> Result<PlayerQuery, QueryError> {
    let battletag = params
        .battletag
        .as_deref()
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .ok_or_else(|| QueryError::InvalidBattleTag(String::new()))?;

    let region = match params.region.as_deref() {
        Some(region) => region.parse()?,
        None => defaults.region,
    };
    let platform = match params.platform.as_deref() {
        Some(platform) => platform.parse()?,
        None => defaults.platform,
    };
    let queue = match params.queue.as_deref() {
        Some(queue) => queue.parse()?,
        None => defaults.queue,
    };

    if platform == Platform::Pc && !is_valid_battletag(battletag) {
        return Err(QueryError::InvalidBattleTag(battletag.to_string()));
    }

    Ok(PlayerQuery {
        battletag: battletag.to_string(),
        region,
        platform,
        queue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Queue, Region};

    fn params(tag: &str) -> QueryParams {
        QueryParams {
            battletag: Some(tag.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_battletags() {
        for tag in ["Tracer#1234", "Tracer-12345", "abc#0000", "Ünïcödé#2222", "Twelve12char#1234"] {
            assert!(is_valid_battletag(tag), "{} should be valid", tag);
        }
    }

    #[test]
    fn test_invalid_battletags() {
        for tag in [
            "1Tracer#1234",       // leading digit
            "#Tracer#1234",       // leading separator
            "ab#1234",            // name too short
            "Thirteen13chr#1234", // name too long
            "Tracer#123",         // too few digits
            "Tracer#123456",      // too many digits
            "Tracer1234",         // no separator
            "Tra#cer#1234",       // separator inside name
        ] {
            assert!(!is_valid_battletag(tag), "{} should be invalid", tag);
        }
    }

    #[test]
    fn test_defaults_applied() {
        let query = validate_query(&params("Tracer#1234"), &QueryDefaults::default()).unwrap();
        assert_eq!(query.region, Region::Eu);
        assert_eq!(query.platform, Platform::Pc);
        assert_eq!(query.queue, Queue::Competitive);
    }

    #[test]
    fn test_explicit_values_case_insensitive() {
        let p = QueryParams {
            battletag: Some("Tracer#1234".to_string()),
            region: Some("KR".to_string()),
            platform: Some("PC".to_string()),
            queue: Some("QuickPlay".to_string()),
        };
        let query = validate_query(&p, &QueryDefaults::default()).unwrap();
        assert_eq!(query.region, Region::Kr);
        assert_eq!(query.queue, Queue::Quickplay);
    }

    #[test]
    fn test_console_tags_skip_pattern() {
        let p = QueryParams {
            battletag: Some("xX_Console_Xx".to_string()),
            platform: Some("xbl".to_string()),
            ..Default::default()
        };
        assert!(validate_query(&p, &QueryDefaults::default()).is_ok());
    }

    #[test]
    fn test_rejections() {
        let defaults = QueryDefaults::default();
        assert_eq!(
            validate_query(&params("1bad#1234"), &defaults).unwrap_err(),
            QueryError::InvalidBattleTag("1bad#1234".to_string())
        );
        assert!(validate_query(&QueryParams::default(), &defaults).is_err());

        let p = QueryParams {
            region: Some("mars".to_string()),
            ..params("Tracer#1234")
        };
        assert_eq!(
            validate_query(&p, &defaults).unwrap_err(),
            QueryError::UnknownRegion("mars".to_string())
        );
    }
}
