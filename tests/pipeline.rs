//! End-to-End Pipeline Tests
//!
//! Drives the full merge -> segment -> filter -> assemble pipeline
//! against a scratch output file.

use std::fs;

use dictforge::{build_dictionary, BuildError, ExtensionFilter};

fn urls(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_api_path_keeps_all_segments() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("wordlist.txt");

    // json is not in the filter table, so users.json survives
    let stats = build_dictionary(
        vec![urls(&["https://example.com/api/v1/users.json"])],
        &ExtensionFilter::new(),
        &output,
    )
    .unwrap();

    assert_eq!(stats.unique_urls, 1);
    assert_eq!(stats.words_written, 3);
    assert_eq!(fs::read_to_string(&output).unwrap(), "api\nusers.json\nv1\n");
}

#[test]
fn test_static_asset_dropped_but_parent_kept() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("wordlist.txt");

    let stats = build_dictionary(
        vec![urls(&["https://example.com/assets/logo.png"])],
        &ExtensionFilter::new(),
        &output,
    )
    .unwrap();

    assert_eq!(stats.words_written, 1);
    assert_eq!(fs::read_to_string(&output).unwrap(), "assets\n");
}

#[test]
fn test_root_only_input_produces_empty_output_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("wordlist.txt");

    let result = build_dictionary(
        vec![urls(&["https://example.com/"])],
        &ExtensionFilter::new(),
        &output,
    );

    assert!(matches!(result, Err(BuildError::EmptyOutput)));
    assert!(!output.exists());
}

#[test]
fn test_overlapping_sources_merge_before_segmentation() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("wordlist.txt");

    let stats = build_dictionary(
        vec![
            urls(&["https://a.com/x"]),
            urls(&["https://a.com/x", "https://a.com/y"]),
        ],
        &ExtensionFilter::new(),
        &output,
    )
    .unwrap();

    assert_eq!(stats.unique_urls, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), "x\ny\n");
}

#[test]
fn test_both_sources_empty_fails_and_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("wordlist.txt");

    let result = build_dictionary(
        vec![Vec::new(), Vec::new()],
        &ExtensionFilter::new(),
        &output,
    );

    assert!(matches!(result, Err(BuildError::EmptyInput)));
    assert!(!output.exists());
}

#[test]
fn test_malformed_urls_skipped_without_aborting_batch() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("wordlist.txt");

    let stats = build_dictionary(
        vec![urls(&[
            "not-a-url",
            "ftp://example.com/skipped",
            "http://",
            "https://example.com/kept",
        ])],
        &ExtensionFilter::new(),
        &output,
    )
    .unwrap();

    assert_eq!(stats.unique_urls, 4);
    assert_eq!(fs::read_to_string(&output).unwrap(), "kept\n");
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("wordlist.txt");
    fs::write(&output, "leftover\nfrom\nlast\nrun\n").unwrap();

    build_dictionary(
        vec![urls(&["https://example.com/admin"])],
        &ExtensionFilter::new(),
        &output,
    )
    .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "admin\n");
}

#[test]
fn test_config_rules_flow_through_the_filter() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("wordlist.txt");

    let filter = ExtensionFilter::with_rules(&["json".to_string()], &[]);
    let stats = build_dictionary(
        vec![urls(&["https://example.com/api/users.json"])],
        &filter,
        &output,
    )
    .unwrap();

    assert_eq!(stats.words_written, 1);
    assert_eq!(fs::read_to_string(&output).unwrap(), "api\n");
}
