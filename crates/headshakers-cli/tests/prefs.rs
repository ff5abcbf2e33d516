use assert_cmd::Command;
use headshakers_testing::{collection, write_collection};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn headshakers(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("headshakers").expect("binary exists");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_prefs_show_reports_defaults_when_nothing_is_saved() {
    let dir = TempDir::new().unwrap();

    headshakers(&dir)
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-page-size = 12"))
        .stdout(predicate::str::contains("hover-preview = false"));
}

#[test]
fn test_prefs_set_persists_across_invocations() {
    let dir = TempDir::new().unwrap();

    headshakers(&dir)
        .args(["prefs", "set", "default-page-size", "24"])
        .assert()
        .success();

    headshakers(&dir)
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-page-size = 24"));
}

#[test]
fn test_prefs_set_rejects_unknown_keys() {
    let dir = TempDir::new().unwrap();

    headshakers(&dir)
        .args(["prefs", "set", "theme", "dark"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_prefs_set_rejects_invalid_page_size() {
    let dir = TempDir::new().unwrap();

    headshakers(&dir)
        .args(["prefs", "set", "default-page-size", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_saved_page_size_seeds_browse() {
    let dir = TempDir::new().unwrap();
    let items_path = dir.path().join("collection.json");
    write_collection(&items_path, &collection(30)).unwrap();

    headshakers(&dir)
        .args(["prefs", "set", "default-page-size", "24"])
        .assert()
        .success();

    let output = headshakers(&dir)
        .args(["browse", "--items"])
        .arg(&items_path)
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let view: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["pageSize"], 24);
    assert_eq!(view["visibleItems"].as_array().unwrap().len(), 24);
}

#[test]
fn test_explicit_page_size_beats_the_saved_preference() {
    let dir = TempDir::new().unwrap();
    let items_path = dir.path().join("collection.json");
    write_collection(&items_path, &collection(30)).unwrap();

    headshakers(&dir)
        .args(["prefs", "set", "default-page-size", "48"])
        .assert()
        .success();

    let output = headshakers(&dir)
        .args(["browse", "--items"])
        .arg(&items_path)
        .args(["--page-size", "12", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let view: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["pageSize"], 12);
}
