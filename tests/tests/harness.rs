//! Harness runs over the snapshot fixtures.

use std::path::PathBuf;

use ordbok_tests::prelude::*;
use ordbok_tests::{load_entries, DECODE_KIND};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn ids(report: &RunReport) -> Vec<&str> {
    report.outcomes.iter().map(|o| o.id.as_str()).collect()
}

fn kind<'r>(report: &'r RunReport, id: &str) -> Option<&'r str> {
    report.outcome(id).and_then(|o| o.kind.as_deref())
}

#[test]
fn test_directory_run_reports_every_entry() {
    // GIVEN
    let harness = Harness::new(HarnessConfig::new()).unwrap();

    // WHEN
    let report = harness.run_path(fixture("entries")).unwrap();

    // THEN
    assert_eq!(ids(&report), vec!["bil", "den", "hus", "og", "stor", "vaere"]);
    assert_eq!(report.passed(), 4);
    assert_eq!(report.failed(), 2);
    assert_eq!(kind(&report, "bil"), Some("invalid_structure"));
    assert_eq!(kind(&report, "og"), Some("unexpected_section"));
    assert!(!report.stopped_early);
}

#[test]
fn test_recursive_run_includes_subdirectories() {
    let harness = Harness::new(HarnessConfig::new().with_recursive(true)).unwrap();

    let report = harness.run_path(fixture("entries")).unwrap();

    assert_eq!(report.total(), 7);
    assert_eq!(kind(&report, "gammel"), Some("missing_meta"));
}

#[test]
fn test_filter_selects_entries_by_id() {
    let harness = Harness::new(HarnessConfig::new().with_filter("^(h|s)")).unwrap();

    let report = harness.run_path(fixture("entries")).unwrap();

    assert_eq!(ids(&report), vec!["hus", "stor"]);
    assert!(report.all_passed());
}

#[test]
fn test_fail_fast() {
    let harness = Harness::new(HarnessConfig::new().with_fail_fast(true)).unwrap();

    let report = harness.run_path(fixture("entries")).unwrap();

    assert_eq!(ids(&report), vec!["bil"]);
    assert!(report.stopped_early);
    assert!(report.summary().contains("Stopped at first failure"));
}

#[test]
fn test_single_file() {
    let entries = load_entries(fixture("entries/hus.json"), &HarnessConfig::new()).unwrap();

    assert_eq!(entries.len(), 1);
    let entry = entries[0].as_ref().unwrap();
    assert_eq!(entry.id, "hus");
    assert_eq!(entry.path, fixture("entries/hus.json"));
}

#[test]
fn test_extensions_select_snapshot_files() {
    let config = HarnessConfig::new().with_extensions(["txt"]);

    let entries = load_entries(fixture("entries"), &config).unwrap();

    // Only README.txt is picked up, and it is not a page snapshot.
    assert_eq!(entries.len(), 1);
    assert!(matches!(
        &entries[0],
        Err(UnreadableEntry { id, error: HarnessError::Decode { .. }, .. }) if id == "README"
    ));
}

#[test]
fn test_malformed_snapshot() {
    let entries = load_entries(fixture("broken"), &HarnessConfig::new()).unwrap();

    match entries.as_slice() {
        [Err(unreadable)] => {
            assert_eq!(unreadable.id, "halv");
            assert_eq!(unreadable.path, fixture("broken/halv.json"));
            assert!(matches!(unreadable.error, HarnessError::Decode { .. }));
        }
        other => panic!("expected one unreadable entry, got {:?}", other),
    }
}

#[test]
fn test_malformed_snapshot_does_not_stop_run() {
    // GIVEN - two readable entries and one truncated snapshot
    let harness = Harness::new(HarnessConfig::new()).unwrap();

    // WHEN
    let report = harness.run_path(fixture("mixed")).unwrap();

    // THEN
    assert_eq!(ids(&report), vec!["halv", "hus", "og"]);
    assert_eq!(kind(&report, "halv"), Some(DECODE_KIND));
    assert!(report.outcome("hus").is_some_and(|o| o.passed));
    assert_eq!(kind(&report, "og"), Some("unexpected_section"));
    assert!(!report.stopped_early);
    assert!(report.summary().contains("halv: failed to decode page snapshot"));
}

#[test]
fn test_fail_fast_on_malformed_snapshot() {
    let harness = Harness::new(HarnessConfig::new().with_fail_fast(true)).unwrap();

    let report = harness.run_path(fixture("mixed")).unwrap();

    assert_eq!(ids(&report), vec!["halv"]);
    assert!(report.stopped_early);
}

#[test]
fn test_duplicate_entry_ids() {
    let flat = load_entries(fixture("duplicates"), &HarnessConfig::new()).unwrap();
    assert_eq!(flat.len(), 1);

    let nested = load_entries(fixture("duplicates"), &HarnessConfig::new().with_recursive(true));
    assert!(matches!(nested, Err(HarnessError::DuplicateEntry { entry, .. }) if entry == "hus"));
}

#[test]
fn test_report_json() {
    let harness = Harness::new(HarnessConfig::new().with_filter("^og$")).unwrap();
    let report = harness.run_path(fixture("entries")).unwrap();

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(
        json["outcomes"][0]["message"],
        "Unexpected meta section found: Etymology"
    );
    assert_eq!(json["outcomes"][0]["kind"], "unexpected_section");
}
