//! End-to-end pipeline tests
//!
//! Run the binary against fixture CSVs and check the console report and
//! chart files it produces.

use std::fs;
use std::path::{Path, PathBuf};

use predicates::prelude::*;

const CHART_FILES: [&str; 3] = [
    "boxplot_weekday_weekend.png",
    "scatter_daily_usage.png",
    "hist_weekday_weekend.png",
];

/// Four weekdays [100,120,110,130] and two weekend days [200,220]:
/// weekday mean 115, weekend mean 210, t ~= -7.982, df ~= 1.90.
fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("usage.csv");
    fs::write(
        &path,
        "day,total_minutes,type\n\
         1,100,Weekday\n\
         2,120,Weekday\n\
         3,110,Weekday\n\
         4,130,Weekday\n\
         5,200,Weekend\n\
         6,220,Weekend\n",
    )
    .unwrap();
    path
}

fn screenstat() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("screenstat")
}

#[test]
fn test_full_run_prints_report() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_fixture(dir.path());

    screenstat()
        .arg(&csv)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall mean (min): 146.67"))
        .stdout(predicate::str::contains("Weekday mean (min): 115.00"))
        .stdout(predicate::str::contains("Weekday SD (min): 12.91"))
        .stdout(predicate::str::contains("Weekend mean (min): 210.00"))
        .stdout(predicate::str::contains(
            "Welch two-sample t-test (Weekday - Weekend)",
        ))
        .stdout(predicate::str::contains("  t-statistic: -7.982"))
        .stdout(predicate::str::contains("  Approx. df: 1.90"))
        .stdout(predicate::str::contains("weekend usage is higher"))
        .stdout(predicate::str::contains("No p-value is computed here"))
        .stdout(predicate::str::contains("Plots saved as:"));
}

#[test]
fn test_full_run_writes_three_charts() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_fixture(dir.path());

    screenstat()
        .arg(&csv)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success();

    for name in CHART_FILES {
        let chart = dir.path().join(name);
        assert!(chart.exists(), "missing chart {name}");
        assert!(fs::metadata(&chart).unwrap().len() > 0);
    }
}

#[test]
fn test_charts_overwrite_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_fixture(dir.path());
    let stale = dir.path().join(CHART_FILES[0]);
    fs::write(&stale, b"not a png").unwrap();

    screenstat()
        .arg(&csv)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success();

    assert_ne!(fs::read(&stale).unwrap(), b"not a png");
}

#[test]
fn test_missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    screenstat()
        .arg(dir.path().join("no_such.csv"))
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_missing_type_column_fails_before_stats() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("usage.csv");
    fs::write(&csv, "day,total_minutes\n1,100\n2,120\n").unwrap();

    screenstat()
        .arg(&csv)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Overall mean").not())
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_unknown_category_label_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("usage.csv");
    fs::write(
        &csv,
        "day,total_minutes,type\n1,100,Weekday\n2,120,Holiday\n",
    )
    .unwrap();

    screenstat()
        .arg(&csv)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_single_weekend_row_fails_statistical_precondition() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("usage.csv");
    fs::write(
        &csv,
        "day,total_minutes,type\n1,100,Weekday\n2,120,Weekday\n3,200,Weekend\n",
    )
    .unwrap();

    screenstat()
        .arg(&csv)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 samples"));
}
