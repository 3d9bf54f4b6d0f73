//! Raw playtime readings and the ordered set they travel in

use serde::{Deserialize, Serialize};
use crate::types::{RecordsError, TimeUnit};

/// One hero's reading as scraped from a profile.
///
/// `reported_value` is the floor of the true playtime in `unit`, so the
/// true value lies in `[reported_value, reported_value + 1)`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawCategoryRecord {
    pub reported_value: u32,
    pub unit: String,
    pub percent_of_total: f64,
}

impl RawCategoryRecord {
    pub fn new(reported_value: u32, unit: impl Into<String>, percent_of_total: f64) -> Self {
        Self {
            reported_value,
            unit: unit.into(),
            percent_of_total,
        }
    }

    /// Sentinel for a reading whose text could not be split into value + unit
    pub fn unparseable() -> Self {
        Self::default()
    }

    /// Build a record from a profile description such as "10 hours".
    ///
    /// The text must be exactly `<integer> <unit>`; anything else becomes
    /// the sentinel and its percent is discarded.
    pub fn from_description(description: &str, percent_of_total: f64) -> Self {
        let parts: Vec<&str> = description.split(' ').collect();
        if let [value, unit] = parts.as_slice() {
            if let Ok(value) = value.trim().parse::<u32>() {
                return Self::new(value, *unit, percent_of_total);
            }
        }
        Self::unparseable()
    }

    pub fn is_unparseable(&self) -> bool {
        self.unit.is_empty()
    }

    /// Unit resolved by prefix, if recognizable
    pub fn time_unit(&self) -> Option<TimeUnit> {
        TimeUnit::from_label(&self.unit)
    }
}

impl std::fmt::Display for RawCategoryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({:.2}%)", self.reported_value, self.unit, self.percent_of_total)
    }
}

/// Category → reading, in the order the caller supplied them.
///
/// Order matters: it breaks ties when picking the anchor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryRecords {
    entries: Vec<(String, RawCategoryRecord)>,
}

impl CategoryRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category; keys must be unique
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        record: RawCategoryRecord,
    ) -> Result<(), RecordsError> {
        let category = category.into();
        if self.get(&category).is_some() {
            return Err(RecordsError::DuplicateCategory(category));
        }
        self.entries.push((category, record));
        Ok(())
    }

    /// Build from (category, record) pairs, keeping their order
    pub fn from_entries<I, S>(entries: I) -> Result<Self, RecordsError>
    where
        I: IntoIterator<Item = (S, RawCategoryRecord)>,
        S: Into<String>,
    {
        let mut records = Self::new();
        for (category, record) in entries {
            records.insert(category, record)?;
        }
        Ok(records)
    }

    pub fn get(&self, category: &str) -> Option<&RawCategoryRecord> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawCategoryRecord)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_description() {
        let record = RawCategoryRecord::from_description("10 hours", 50.0);
        assert_eq!(record, RawCategoryRecord::new(10, "hours", 50.0));
        assert_eq!(record.time_unit(), Some(TimeUnit::Hour));
    }

    #[test]
    fn test_from_description_unparseable() {
        for text in ["--", "", "10", "ten hours", "1 2 hours", "-3 minutes"] {
            let record = RawCategoryRecord::from_description(text, 12.5);
            assert!(record.is_unparseable(), "'{}' should be the sentinel", text);
            assert_eq!(record.percent_of_total, 0.0);
            assert_eq!(record.reported_value, 0);
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let records = CategoryRecords::from_entries(vec![
            ("Zarya", RawCategoryRecord::new(3, "hours", 10.0)),
            ("Ana", RawCategoryRecord::new(7, "hours", 20.0)),
            ("Mei", RawCategoryRecord::new(1, "hour", 5.0)),
        ])
        .unwrap();

        let order: Vec<&str> = records.categories().collect();
        assert_eq!(order, vec!["Zarya", "Ana", "Mei"]);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let mut records = CategoryRecords::new();
        records.insert("Ana", RawCategoryRecord::new(1, "hour", 1.0)).unwrap();
        let err = records.insert("Ana", RawCategoryRecord::new(2, "hours", 2.0)).unwrap_err();
        assert_eq!(err, RecordsError::DuplicateCategory("Ana".to_string()));
        assert_eq!(records.get("Ana").unwrap().reported_value, 1);
    }

    #[test]
    fn test_display() {
        let record = RawCategoryRecord::new(5, "minutes", 12.345);
        assert_eq!(record.to_string(), "5 minutes (12.35%)");
    }
}
