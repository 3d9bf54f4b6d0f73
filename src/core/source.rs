//! Record sources: where raw readings come from
//!
//! Live profile scraping sits behind `RecordSource`, so estimation can be
//! driven from fixtures without any network or markup.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};
use crate::core::QueryDefaults;
use crate::types::{
    profile_path, CategoryRecords, Platform, PlayerQuery, Queue, RawCategoryRecord, Region,
    SourceError,
};

/// Capability to fetch the raw readings of one profile
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_raw_records(&self, query: &PlayerQuery) -> Result<CategoryRecords, SourceError>;
}

/// Fixture file layout
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureFile {
    profiles: Vec<FixtureProfile>,
}

/// One profile; region and platform default to eu/pc
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureProfile {
    battletag: String,
    #[serde(default = "default_region")]
    region: Region,
    #[serde(default = "default_platform")]
    platform: Platform,
    #[serde(default)]
    competitive: Option<Vec<FixtureHero>>,
    #[serde(default)]
    quickplay: Option<Vec<FixtureHero>>,
}

/// One hero entry as a profile page shows it
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureHero {
    name: String,
    description: String,
    #[serde(default)]
    percent: f64,
}

fn default_region() -> Region {
    QueryDefaults::default().region
}

fn default_platform() -> Platform {
    QueryDefaults::default().platform
}

/// In-memory source keyed by profile path and queue
#[derive(Debug, Default, Clone)]
pub struct FixtureSource {
    profiles: HashMap<String, HashMap<Queue, CategoryRecords>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the readings of one profile's queue.
    ///
    /// `region` only separates PC profiles, as on the career pages.
    pub fn insert(
        &mut self,
        battletag: &str,
        region: Region,
        platform: Platform,
        queue: Queue,
        records: CategoryRecords,
    ) {
        self.profiles
            .entry(profile_path(battletag, region, platform))
            .or_default()
            .insert(queue, records);
    }

    /// Parse a fixture document
    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        let file: FixtureFile = serde_json::from_str(json)?;
        let mut source = Self::new();

        for profile in file.profiles {
            let queues = [
                (Queue::Competitive, profile.competitive),
                (Queue::Quickplay, profile.quickplay),
            ];
            for (queue, heroes) in queues {
                let Some(heroes) = heroes else { continue };
                let records = CategoryRecords::from_entries(heroes.into_iter().map(|hero| {
                    let record = RawCategoryRecord::from_description(&hero.description, hero.percent);
                    (hero.name, record)
                }))?;
                source.insert(
                    &profile.battletag,
                    profile.region,
                    profile.platform,
                    queue,
                    records,
                );
            }
        }

        Ok(source)
    }

    /// Load a fixture file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let source = Self::from_json_str(&json)?;
        info!("Loaded {} fixture profiles from {}", source.len(), path.display());
        Ok(source)
    }

    /// Synchronous lookup.
    ///
    /// A known profile without the requested queue yields an empty set.
    pub fn records_for(&self, query: &PlayerQuery) -> Result<CategoryRecords, SourceError> {
        let path = query.profile_path();
        let queues = self
            .profiles
            .get(&path)
            .ok_or_else(|| SourceError::ProfileNotFound(path.clone()))?;

        let records = queues.get(&query.queue).cloned().unwrap_or_default();
        debug!(profile = %path, queue = query.queue.code(), heroes = records.len(), "Fixture lookup");
        Ok(records)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[async_trait]
impl RecordSource for FixtureSource {
    async fn fetch_raw_records(&self, query: &PlayerQuery) -> Result<CategoryRecords, SourceError> {
        self.records_for(query)
    }
}
