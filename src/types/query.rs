//! Profile lookup parameters

use serde::{Deserialize, Serialize};
use crate::types::QueryError;

/// Profile region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    Eu,
    Kr,
    Cn,
}

impl Region {
    pub fn code(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
            Region::Kr => "kr",
            Region::Cn => "cn",
        }
    }
}

impl std::str::FromStr for Region {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            "kr" => Ok(Region::Kr),
            "cn" => Ok(Region::Cn),
            _ => Err(QueryError::UnknownRegion(s.to_string())),
        }
    }
}

/// Gaming platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Pc,
    Psn,
    Xbl,
}

impl Platform {
    pub fn code(&self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::Psn => "psn",
            Platform::Xbl => "xbl",
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pc" => Ok(Platform::Pc),
            "psn" => Ok(Platform::Psn),
            "xbl" => Ok(Platform::Xbl),
            _ => Err(QueryError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Match queue the playtime was accumulated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Queue {
    Competitive,
    Quickplay,
}

impl Queue {
    pub fn code(&self) -> &'static str {
        match self {
            Queue::Competitive => "competitive",
            Queue::Quickplay => "quickplay",
        }
    }
}

impl std::str::FromStr for Queue {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "competitive" => Ok(Queue::Competitive),
            "quickplay" => Ok(Queue::Quickplay),
            _ => Err(QueryError::UnknownQueue(s.to_string())),
        }
    }
}

/// A validated profile lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerQuery {
    pub battletag: String,
    pub region: Region,
    pub platform: Platform,
    pub queue: Queue,
}

impl PlayerQuery {
    /// Profile path as it appears in career URLs
    pub fn profile_path(&self) -> String {
        profile_path(&self.battletag, self.region, self.platform)
    }
}

impl std::fmt::Display for PlayerQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}/{}/{}]",
            self.battletag,
            self.region.code(),
            self.platform.code(),
            self.queue.code()
        )
    }
}

/// Career path of a profile.
///
/// PC profiles live under a region and spell `Name#1234` as `Name-1234`.
/// Console profiles have no region and keep the tag as given.
pub fn profile_path(battletag: &str, region: Region, platform: Platform) -> String {
    match platform {
        Platform::Pc => format!(
            "{}/{}/{}",
            platform.code(),
            region.code(),
            battletag.replace('#', "-")
        ),
        Platform::Psn | Platform::Xbl => format!("{}/{}", platform.code(), battletag),
    }
}
