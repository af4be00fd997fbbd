//! End-to-end tests for the tt-geo binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn tt_geo() -> Command {
    let mut cmd = Command::cargo_bin("tt-geo").unwrap();
    // Keep the working directory free of stray config files
    cmd.current_dir(std::env::temp_dir());
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn distance_reports_all_units() {
    tt_geo()
        .args(["--json", "distance", "40.7128,-74.0060", "34.0522,-118.2437"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kilometers\": 3935.746"))
        .stdout(predicate::str::contains("\"meters\": 3935746"));
}

#[test]
fn distance_rejects_invalid_first_coordinate() {
    tt_geo()
        .args(["distance", "0,500", "0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid first coordinate"));
}

#[test]
fn distance_rejects_invalid_second_coordinate() {
    tt_geo()
        .args(["distance", "0,0", "-91,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid second coordinate"));
}

#[test]
fn unparseable_coordinate_is_a_usage_error() {
    tt_geo().args(["distance", "nowhere", "0,0"]).assert().code(2);
}

#[test]
fn bearing_due_east() {
    tt_geo()
        .args(["--json", "bearing", "0,0", "0,10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bearing\": 90.0"))
        .stdout(predicate::str::contains("\"compass\": \"E\""));
}

#[test]
fn midpoint_on_equator() {
    tt_geo()
        .args(["--json", "midpoint", "0,0", "0,90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"longitude\": 45.0"));
}

#[test]
fn format_decimal_and_dms() {
    tt_geo()
        .args(["format", "40.7128,-74.0060"])
        .assert()
        .success()
        .stdout("40.712800, -74.006000\n");

    tt_geo()
        .args(["format", "40.7128,-74.0060", "--style", "dms"])
        .assert()
        .success()
        .stdout("40°42'46.08\"N 74°0'21.6\"W\n");
}

#[test]
fn format_unknown_style_is_rejected() {
    tt_geo()
        .args(["format", "0,0", "--style", "utm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("utm"));
}

#[test]
fn format_style_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".tt-geo.toml"), "[format]\nstyle = \"dms\"\n").unwrap();

    tt_geo()
        .current_dir(dir.path())
        .args(["format", "0,0"])
        .assert()
        .success()
        .stdout("0°0'0\"N 0°0'0\"E\n");
}

#[test]
fn broken_config_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[format]\nstyle = 42").unwrap();

    tt_geo()
        .arg("--config")
        .arg(file.path())
        .args(["format", "0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn validate_exit_codes() {
    tt_geo().args(["validate", "90,180"]).assert().success();
    tt_geo().args(["validate", "-90,-180"]).assert().success();
    tt_geo().args(["validate", "91,0"]).assert().failure();
    tt_geo()
        .args(["validate", r#"{"latitude": "invalid", "longitude": 0}"#])
        .assert()
        .failure();
}

#[test]
fn bounds_inside_and_outside() {
    let args = ["--north-east", "41,-73", "--south-west", "40,-75"];

    tt_geo()
        .args(["bounds", "40.7128,-74.0060"])
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Inside bounds"));

    tt_geo()
        .args(["bounds", "42,-74"])
        .args(args)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Outside bounds"));
}

#[test]
fn bounds_invalid_corner() {
    tt_geo()
        .args(["bounds", "0,0", "--north-east", "100,0", "--south-west", "0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid coordinates"));
}

fn items_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": 1, "location": {{"latitude": 48.8566, "longitude": 2.3522}}}},
            {{"id": 2, "location": "POINT(-74.0060 40.7128)"}},
            {{"id": 3, "location": {{"coordinates": [13.4050, 52.5200]}}}},
            {{"id": 4, "location": null}}
        ]"#
    )
    .unwrap();
    file
}

#[test]
fn nearest_ranks_items() {
    let file = items_file();

    tt_geo()
        .args(["--json", "nearest", "51.5074,-0.1278", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_items\": 4"))
        .stdout(predicate::str::contains("\"count\": 3"));
}

#[test]
fn nearest_radius_and_limit() {
    let file = items_file();

    tt_geo()
        .args(["--json", "nearest", "51.5074,-0.1278", "--radius", "1000", "--limit", "1"])
        .arg("--file")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("\"id\": 1"));
}

#[test]
fn nearest_bounds_require_both_corners() {
    let file = items_file();

    tt_geo()
        .args(["nearest", "0,0", "--north-east", "10,10", "--file"])
        .arg(file.path())
        .assert()
        .code(2);
}

#[test]
fn nearest_missing_file() {
    tt_geo()
        .args(["nearest", "0,0", "--file", "/nonexistent/items.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
