use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn merchcal() -> Command {
    let mut cmd = Command::cargo_bin("merchcal").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_dates_lists_inclusive_range() {
    let json = stdout_json(merchcal().args(["dates", "2024-02-04", "2024-02-06"]));
    assert_eq!(
        json,
        serde_json::json!(["2024-02-04", "2024-02-05", "2024-02-06"])
    );
}

#[test]
fn test_dates_reversed_range_fails() {
    merchcal()
        .args(["dates", "2024-02-06", "2024-02-04"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));
}

#[test]
fn test_compare_restated_by_default() {
    let json = stdout_json(merchcal().args(["compare", "2024-02-10", "--year", "2023"]));
    assert_eq!(json["restated"], true);
    assert_eq!(json["comparison_day"], "2023-02-11");
}

#[test]
fn test_compare_unrestated() {
    let json = stdout_json(merchcal().args([
        "compare",
        "2024-02-10",
        "--year",
        "2023",
        "--unrestated",
    ]));
    assert_eq!(json["restated"], false);
    assert_eq!(json["comparison_day"], "2023-02-04");
}

#[test]
fn test_release_by_period() {
    let json = stdout_json(merchcal().args(["release", "--period", "1", "--year", "2024"]));
    assert_eq!(json["sales_release_day"], "2024-02-08");
}

#[test]
fn test_release_by_date() {
    let json = stdout_json(merchcal().args(["release", "--date", "2025-01-20"]));
    assert_eq!(json["period"], 12);
    assert_eq!(json["year"], 2024);
    assert_eq!(json["sales_release_day"], "2025-01-09");
}

#[test]
fn test_release_invalid_period() {
    merchcal()
        .args(["release", "--period", "13", "--year", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period: 13"));
}

#[test]
fn test_release_requires_year_with_period() {
    merchcal()
        .args(["release", "--period", "3"])
        .assert()
        .failure();
}

#[test]
fn test_release_season() {
    let json = stdout_json(merchcal().args(["release-season", "fall", "2024"]));
    let days = json.as_array().unwrap();
    assert_eq!(days.len(), 6);
    assert_eq!(days[0], "2024-08-08");
}

#[test]
fn test_release_season_rejects_unknown_season() {
    merchcal()
        .args(["release-season", "winter", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid season"));
}

#[test]
fn test_release_year() {
    let json = stdout_json(merchcal().args(["release-year", "2024"]));
    let days = json.as_array().unwrap();
    assert_eq!(days.len(), 12);
    assert_eq!(days[0], "2024-02-08");
    assert_eq!(days[11], "2025-01-09");
}

#[test]
fn test_info() {
    let json = stdout_json(merchcal().args(["info", "2024-02-03"]));
    assert_eq!(json["fiscal_year"], 2023);
    assert_eq!(json["week"], 53);
    assert_eq!(json["period"], 12);
    assert_eq!(json["quarter"], 4);
    assert_eq!(json["season"], "fall");
    assert_eq!(json["weekday"], "Sat");
}

#[test]
fn test_invalid_date_argument() {
    merchcal()
        .args(["info", "2024-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
