//! Tests for CLI output formatting.
//!
//! Covers JSON and CSV rendering, and saving to files.

use std::fs;

use punkapi::output::{emit, render_csv, render_json, save_beers};
use punkapi::{Beer, OutputFormat, PunkError, Sink};

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_round_trip_preserves_all_fields() {
    let beers = make_test_catalog();
    let json = render_json(&beers, false).unwrap();

    let parsed: Vec<Beer> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, beers);
}

#[test]
fn test_json_output_is_array_in_field_order() {
    let json = render_json(&[make_buzz()], false).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed.is_array());

    let keys = ["\"id\"", "\"name\"", "\"tagline\"", "\"description\"", "\"abv\"", "\"ibu\""];
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "fields out of order: {json}");
}

#[test]
fn test_empty_result_is_empty_json_array() {
    let json = render_json(&[], false).unwrap();
    assert_eq!(json, "[]");
}

// ============================================================================
// CSV Output Tests
// ============================================================================

#[test]
fn test_csv_escaping_parses_back() {
    let awkward = make_awkward_beer();
    let csv_text = render_csv(&[awkward.clone()]).unwrap();

    let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["ProductID", "Name", "Tagline", "Description", "ABV", "IBU"]
    );

    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 1);
    assert_eq!(&records[0][0], "999");
    assert_eq!(&records[0][1], awkward.name);
    assert_eq!(&records[0][2], awkward.tagline);
    assert_eq!(&records[0][3], awkward.description);
    assert_eq!(records[0][4].parse::<f64>().unwrap(), awkward.abv);
    assert_eq!(records[0][5].parse::<f64>().unwrap(), awkward.ibu);
}

#[test]
fn test_csv_one_row_per_beer() {
    let beers = make_test_catalog();
    let csv_text = render_csv(&beers).unwrap();

    let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
    let ids: Vec<u64> = rdr
        .records()
        .map(|r| r.unwrap()[0].parse().unwrap())
        .collect();
    assert_eq!(ids, beers.iter().map(|b| b.id).collect::<Vec<_>>());
}

// ============================================================================
// File Output Tests
// ============================================================================

#[test]
fn test_save_json_is_uncolored_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beers.json");
    fs::write(&path, "stale content that is much longer than it needs to be").unwrap();

    save_beers(&[make_buzz()], OutputFormat::Json, &path).unwrap();

    let saved = fs::read_to_string(&path).unwrap();
    assert!(!saved.contains('\u{1b}'));
    assert!(!saved.contains("stale"));
    let parsed: Vec<Beer> = serde_json::from_str(&saved).unwrap();
    assert_eq!(parsed, vec![make_buzz()]);
}

#[test]
fn test_save_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beers.csv");

    save_beers(&make_test_catalog(), OutputFormat::Csv, &path).unwrap();

    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with("ProductID,Name,Tagline,Description,ABV,IBU\n"));
    assert_eq!(saved.lines().count(), 1 + make_test_catalog().len());
}

#[test]
fn test_save_to_missing_directory_is_file_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("beers.json");

    let err = save_beers(&[make_buzz()], OutputFormat::Json, &path).unwrap_err();

    match err {
        PunkError::FileWrite { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected FileWrite error, got {other:?}"),
    }
}

#[test]
fn test_emit_to_file_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let mut stdout = Vec::new();

    emit(
        &mut stdout,
        &[make_buzz()],
        OutputFormat::Json,
        &Sink::File(path.clone()),
        false,
    )
    .unwrap();

    assert!(stdout.is_empty());
    assert!(path.exists());
}

// ============================================================================
// Test Helpers
// ============================================================================

fn make_buzz() -> Beer {
    Beer::new(
        1,
        "Buzz",
        "A Real Bitter Experience.",
        "A light, crisp and bitter IPA.",
        4.5,
        60.0,
    )
}

fn make_test_catalog() -> Vec<Beer> {
    vec![
        make_buzz(),
        Beer::new(2, "Trashy Blonde", "You Know You Shouldn't", "A Pale Ale.", 4.1, 41.5),
        Beer::new(3, "Berliner Weisse With Yuzu - B-Sides", "Sour.", "Yuzu.", 4.2, 0.0),
    ]
}

fn make_awkward_beer() -> Beer {
    Beer::new(
        999,
        "Comma, \"Quoted\" Ale",
        "Line one\nline two",
        "Contains, commas; and \"quotes\".",
        12.5,
        1157.0,
    )
}
