//! Integration tests for estimation
//!
//! Tests the full path: fixture records → DurationReconstructor → ConsistencyChecker

use playtime::core::{ConsistencyChecker, DurationReconstructor, FixtureSource};
use playtime::types::{
    CategoryRecords, Corroboration, EstimateError, Platform, PlayerQuery, Queue,
    RawCategoryRecord, Region,
};
use pretty_assertions::assert_eq;
use std::time::Duration;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/profiles.json");

fn query(tag: &str, queue: Queue) -> PlayerQuery {
    PlayerQuery {
        battletag: tag.to_string(),
        region: Region::Eu,
        platform: Platform::Pc,
        queue,
    }
}

fn assert_secs(actual: Option<Duration>, expected: f64) {
    let actual = actual.expect("missing estimate").as_secs_f64();
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}s, got {}s",
        expected,
        actual
    );
}

/// Two heroes in hours, anchor on the larger reading
#[test]
fn test_two_hero_profile() {
    let records = CategoryRecords::from_entries(vec![
        ("Genji", RawCategoryRecord::new(10, "hours", 50.0)),
        ("Mercy", RawCategoryRecord::new(5, "hours", 25.0)),
    ])
    .unwrap();

    let estimates = DurationReconstructor::new().estimate_all(&records).unwrap();
    assert_eq!(estimates.get("Genji"), Some(Duration::from_secs(37800)));
    assert_eq!(estimates.get("Mercy"), Some(Duration::from_secs(18900)));

    let report = ConsistencyChecker::new().check(&records).unwrap();
    assert_eq!(report.get("Genji"), Some(Corroboration::Exact));
    assert_eq!(report.get("Mercy"), Some(Corroboration::Exact));
}

/// A lone unparseable reading with a nonzero percent estimates to zero
#[test]
fn test_lone_unparseable_reading() {
    let records =
        CategoryRecords::from_entries(vec![("Ana", RawCategoryRecord::new(0, "", 10.0))]).unwrap();

    let estimates = DurationReconstructor::new().estimate_all(&records).unwrap();
    assert_eq!(estimates.get("Ana"), Some(Duration::ZERO));

    let report = ConsistencyChecker::new().check(&records).unwrap();
    assert!(report.is_empty());
}

/// Equal readings: the first one listed anchors
#[test]
fn test_tie_goes_to_first_listed() {
    let forward = CategoryRecords::from_entries(vec![
        ("A", RawCategoryRecord::new(5, "h", 30.0)),
        ("B", RawCategoryRecord::new(5, "h", 40.0)),
    ])
    .unwrap();
    let reversed = CategoryRecords::from_entries(vec![
        ("B", RawCategoryRecord::new(5, "h", 40.0)),
        ("A", RawCategoryRecord::new(5, "h", 30.0)),
    ])
    .unwrap();

    let r = DurationReconstructor::new();
    assert_eq!(r.select_anchor(&forward).unwrap().0, "A");
    assert_eq!(r.select_anchor(&reversed).unwrap().0, "B");

    // Anchor always sits at the bucket midpoint
    assert_eq!(r.estimate_all(&forward).unwrap().get("A"), Some(Duration::from_secs(19800)));
    assert_eq!(r.estimate_all(&reversed).unwrap().get("B"), Some(Duration::from_secs(19800)));
}

#[test]
fn test_batch_failures() {
    let r = DurationReconstructor::new();
    assert_eq!(
        r.estimate_all(&CategoryRecords::new()).unwrap_err(),
        EstimateError::EmptyInput
    );

    let degenerate =
        CategoryRecords::from_entries(vec![("A", RawCategoryRecord::new(5, "h", 0.0))]).unwrap();
    assert!(matches!(
        r.estimate_all(&degenerate),
        Err(EstimateError::ZeroAnchorPercent { .. })
    ));
    assert!(matches!(
        ConsistencyChecker::new().check(&degenerate),
        Err(EstimateError::ZeroAnchorPercent { .. })
    ));
}

/// The anchor compares raw integers, so "42 minutes" outranks "10 hours"
#[test]
fn test_fixture_profile_mixed_units() {
    let source = FixtureSource::load(FIXTURES).unwrap();
    let records = source.records_for(&query("Tracer#1234", Queue::Competitive)).unwrap();

    let r = DurationReconstructor::new();
    assert_eq!(r.select_anchor(&records).unwrap().0, "Lúcio");

    let estimates = r.estimate_all(&records).unwrap();
    let names: Vec<&str> = estimates.iter().map(|e| e.category.as_str()).collect();
    assert_eq!(names, vec!["Genji", "Mercy", "Lúcio", "Ana"]);

    assert_eq!(estimates.get("Lúcio"), Some(Duration::from_secs(2550)));
    assert_secs(estimates.get("Genji"), 2550.0 * 50.0 / 3.4);
    assert_secs(estimates.get("Mercy"), 2550.0 * 25.0 / 3.4);
    assert_eq!(estimates.get("Ana"), Some(Duration::ZERO));

    let report = ConsistencyChecker::new().check(&records).unwrap();
    assert_eq!(report.len(), 3);
    assert!(report.all_exact());
    assert_eq!(report.get("Ana"), None);
}

#[test]
fn test_fixture_quickplay_tie() {
    let source = FixtureSource::load(FIXTURES).unwrap();
    let records = source.records_for(&query("Tracer-1234", Queue::Quickplay)).unwrap();

    let estimates = DurationReconstructor::new().estimate_all(&records).unwrap();
    assert_eq!(estimates.get("Winston"), Some(Duration::from_secs(12600)));
    assert_secs(estimates.get("D.Va"), 11550.0);
}

#[test]
fn test_estimates_json_shape() {
    let records = CategoryRecords::from_entries(vec![
        ("Genji", RawCategoryRecord::new(10, "hours", 50.0)),
        ("Mercy", RawCategoryRecord::new(5, "hours", 25.0)),
    ])
    .unwrap();

    let estimates = DurationReconstructor::new().estimate_all(&records).unwrap();
    let json = serde_json::to_value(&estimates).unwrap();
    assert_eq!(json, serde_json::json!({"Genji": 37800000.0, "Mercy": 18900000.0}));

    let report = ConsistencyChecker::new().check(&records).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json, serde_json::json!({"Genji": 0, "Mercy": 0}));
}
