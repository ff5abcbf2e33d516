use assert_cmd::Command;
use headshakers_testing::{collection, write_collection, ItemBuilder};
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_items(dir: &TempDir, items: &[headshakers_types::Item]) -> PathBuf {
    let path = dir.path().join("collection.json");
    write_collection(&path, items).expect("write fixture collection");
    path
}

fn headshakers(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("headshakers").expect("binary exists");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

fn parse_stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout is valid JSON")
}

#[test]
fn test_browse_json_dumps_the_view_model() {
    let dir = TempDir::new().unwrap();
    let items_path = write_items(&dir, &collection(30));

    let output = headshakers(&dir)
        .args(["browse", "--items"])
        .arg(&items_path)
        .args(["--page-size", "24", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let view = parse_stdout_json(&output.stdout);
    assert_eq!(view["totalFilteredCount"], 30);
    assert_eq!(view["totalPages"], 2);
    assert_eq!(view["visibleItems"].as_array().unwrap().len(), 24);
    assert_eq!(view["startItem"], 1);
    assert_eq!(view["endItem"], 24);
}

#[test]
fn test_browse_seeds_state_from_a_query_string() {
    let dir = TempDir::new().unwrap();
    let items_path = write_items(&dir, &collection(30));

    let output = headshakers(&dir)
        .args(["browse", "--items"])
        .arg(&items_path)
        .args(["--query", "category=Sports&sortBy=newest", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let view = parse_stdout_json(&output.stdout);
    assert_eq!(view["totalFilteredCount"], 10);
    assert_eq!(view["isFiltersActive"], true);
    for item in view["visibleItems"].as_array().unwrap() {
        assert_eq!(item["category"], "Sports");
    }
}

#[test]
fn test_explicit_flags_override_query_params() {
    let dir = TempDir::new().unwrap();
    let items_path = write_items(&dir, &collection(30));

    let output = headshakers(&dir)
        .args(["browse", "--items"])
        .arg(&items_path)
        .args(["--query", "search=zzz999", "--search", "Bobblehead", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let view = parse_stdout_json(&output.stdout);
    assert_eq!(view["totalFilteredCount"], 30);
}

#[test]
fn test_malformed_query_state_degrades_to_defaults() {
    let dir = TempDir::new().unwrap();
    let items_path = write_items(&dir, &collection(5));

    let output = headshakers(&dir)
        .args(["browse", "--items"])
        .arg(&items_path)
        .args(["--query", "sortBy=bogus&page=999&pageSize=13", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let view = parse_stdout_json(&output.stdout);
    assert_eq!(view["currentPage"], 1);
    assert_eq!(view["pageSize"], 12);
    assert_eq!(view["visibleItems"].as_array().unwrap().len(), 5);
}

#[test]
fn test_filter_miss_prints_the_clear_filters_hint() {
    let dir = TempDir::new().unwrap();
    let items_path = write_items(&dir, &collection(3));

    headshakers(&dir)
        .args(["browse", "--items"])
        .arg(&items_path)
        .args(["--search", "zzz999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bobbleheads match your filters"));
}

#[test]
fn test_empty_collection_prints_the_first_item_prompt() {
    let dir = TempDir::new().unwrap();
    let items_path = write_items(&dir, &[]);

    headshakers(&dir)
        .args(["browse", "--items"])
        .arg(&items_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No bobbleheads yet"));
}

#[test]
fn test_plain_output_shows_the_display_range() {
    let dir = TempDir::new().unwrap();
    let items_path = write_items(&dir, &collection(30));

    headshakers(&dir)
        .args(["browse", "--items"])
        .arg(&items_path)
        .args(["--page", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 25 to 30 of 30 bobbleheads"));
}

#[test]
fn test_missing_items_file_fails_with_an_error() {
    let dir = TempDir::new().unwrap();

    headshakers(&dir)
        .args(["browse", "--items", "/nonexistent/collection.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_stats_rolls_up_the_collection() {
    let dir = TempDir::new().unwrap();
    let items = vec![
        ItemBuilder::new("1").category("Sports").value(40.0).featured().build(),
        ItemBuilder::new("2").category("Movies").value(10.5).build(),
    ];
    let items_path = write_items(&dir, &items);

    let output = headshakers(&dir)
        .args(["stats", "--items"])
        .arg(&items_path)
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stats = parse_stdout_json(&output.stdout);
    assert_eq!(stats["totalItems"], 2);
    assert_eq!(stats["estimatedValue"], 50.5);
    assert_eq!(stats["featuredCount"], 1);
    assert_eq!(stats["categoryCount"], 2);
}
