#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_OVERRIDES: [&str; 5] = [
    "CREDIT_RATER_DATA_DIR",
    "CREDIT_RATER_INDUSTRIES",
    "CREDIT_RATER_FACTOR_SCALE",
    "CREDIT_RATER_AGGREGATE_BINS",
    "RUST_LOG",
];

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn rater(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("credit-rater").expect("binary should compile");
    cmd.env("HOME", home);
    for key in ENV_OVERRIDES {
        cmd.env_remove(key);
    }
    cmd
}

fn demo_values() -> PathBuf {
    manifest_dir().join("demos").join("steel_values.toml")
}

fn copy_bundled_data(to: &Path) {
    fs::create_dir_all(to).expect("data dir should be created");
    for name in [
        "industries_min.json",
        "factor_scale.json",
        "aggregate_bins.csv",
    ] {
        fs::copy(manifest_dir().join("data").join(name), to.join(name))
            .expect("bundled data should copy");
    }
}

#[test]
fn score_renders_markdown_report_for_bundled_data() {
    let home = TempDir::new().expect("temp dir should be created");
    rater(home.path())
        .arg("score")
        .arg("steel")
        .arg("--values")
        .arg(demo_values())
        .arg("--root")
        .arg(manifest_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Credit Rating Estimate"))
        .stdout(predicate::str::contains("Final rating: Baa1"))
        .stdout(predicate::str::contains("Aggregate score: 7.900"))
        .stdout(predicate::str::contains("| business_profile | 25.00 | A | 6.000 |"));
}

#[test]
fn score_renders_json_when_requested() {
    let home = TempDir::new().expect("temp dir should be created");
    rater(home.path())
        .arg("score")
        .arg("steel")
        .arg("--values")
        .arg(demo_values())
        .arg("--format")
        .arg("json")
        .arg("--root")
        .arg(manifest_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"industry\": \"steel\""))
        .stdout(predicate::str::contains("\"final_rating\": \"Baa1\""))
        .stdout(predicate::str::contains("\"aggregate_numeric\": 7.9"))
        .stdout(predicate::str::contains("\"data_fingerprint\""))
        .stdout(predicate::str::contains(format!(
            "\"rater_version\": \"{}\"",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn score_uses_configured_output_format() {
    let home = TempDir::new().expect("temp dir should be created");
    let root = TempDir::new().expect("temp dir should be created");
    copy_bundled_data(&root.path().join("rating-data"));
    fs::write(
        root.path().join("credit-rater.toml"),
        r#"
[data]
dir = "rating-data"

[output]
format = "json"
"#,
    )
    .expect("config should write");

    rater(home.path())
        .arg("score")
        .arg("steel")
        .arg("--values")
        .arg(demo_values())
        .arg("--root")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"final_rating\": \"Baa1\""));
}

#[test]
fn score_fails_with_missing_value() {
    let home = TempDir::new().expect("temp dir should be created");
    let values_dir = TempDir::new().expect("temp dir should be created");
    let values = values_dir.path().join("partial.json");
    fs::write(&values, r#"{ "revenue_usd_bn": 8.0, "business_profile": "A" }"#)
        .expect("values should write");

    rater(home.path())
        .arg("score")
        .arg("steel")
        .arg("--values")
        .arg(&values)
        .arg("--root")
        .arg(manifest_dir())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing value for ebit_margin"));
}

#[test]
fn score_fails_with_unknown_industry() {
    let home = TempDir::new().expect("temp dir should be created");
    rater(home.path())
        .arg("score")
        .arg("shipping")
        .arg("--values")
        .arg(demo_values())
        .arg("--root")
        .arg(manifest_dir())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: scoring failed: unknown industry: shipping"));
}

#[test]
fn score_fails_when_values_file_is_absent() {
    let home = TempDir::new().expect("temp dir should be created");
    rater(home.path())
        .arg("score")
        .arg("steel")
        .arg("--values")
        .arg("does-not-exist.toml")
        .arg("--root")
        .arg(manifest_dir())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn industries_lists_keys_and_names() {
    let home = TempDir::new().expect("temp dir should be created");
    rater(home.path())
        .arg("industries")
        .arg("--root")
        .arg(manifest_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("steel\tSteel Industry"))
        .stdout(predicate::str::contains("reits\t"));
}

#[test]
fn factors_prints_nested_tree() {
    let home = TempDir::new().expect("temp dir should be created");
    rater(home.path())
        .arg("factors")
        .arg("steel")
        .arg("--root")
        .arg(manifest_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("- leverage_coverage 30"))
        .stdout(predicate::str::contains("  - debt_ebitda [numeric] 10"))
        .stdout(predicate::str::contains("- financial_policy [qualitative] 15"));
}

#[test]
fn check_passes_on_bundled_data() {
    let home = TempDir::new().expect("temp dir should be created");
    rater(home.path())
        .arg("check")
        .arg("--root")
        .arg(manifest_dir())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("check: no findings"));
}

#[test]
fn check_exits_with_warning_code_for_band_gap() {
    let home = TempDir::new().expect("temp dir should be created");
    let data = TempDir::new().expect("temp dir should be created");
    copy_bundled_data(data.path());
    let bins = fs::read_to_string(data.path().join("aggregate_bins.csv"))
        .expect("bins should read")
        .replace("8.5,9.5,Baa2\n", "");
    fs::write(data.path().join("aggregate_bins.csv"), bins).expect("bins should write");

    rater(home.path())
        .arg("check")
        .arg("--data-dir")
        .arg(data.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[WARN] bands.gap"));
}

#[test]
fn check_exits_with_blocking_code_for_incomplete_ranges() {
    let home = TempDir::new().expect("temp dir should be created");
    let data = TempDir::new().expect("temp dir should be created");
    copy_bundled_data(data.path());
    fs::write(
        data.path().join("factor_scale.json"),
        r#"{ "qualitative_numeric": { "Aaa": 1, "Aa": 3, "A": 6, "Baa": 9, "Ba": 12, "B": 15, "Caa": 18, "Ca": 20 } }"#,
    )
    .expect("scale should write");

    rater(home.path())
        .arg("check")
        .arg("--data-dir")
        .arg(data.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[BLOCKING] scale.missing_ranges"));
}

#[test]
fn data_dir_from_environment_is_used() {
    let home = TempDir::new().expect("temp dir should be created");
    let data = TempDir::new().expect("temp dir should be created");
    copy_bundled_data(data.path());

    rater(home.path())
        .env("CREDIT_RATER_DATA_DIR", data.path())
        .arg("industries")
        .arg("--root")
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("steel"));
}

#[test]
fn missing_data_files_are_runtime_failures() {
    let home = TempDir::new().expect("temp dir should be created");
    let empty = TempDir::new().expect("temp dir should be created");
    rater(home.path())
        .arg("industries")
        .arg("--root")
        .arg(empty.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("data file not found"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    let home = TempDir::new().expect("temp dir should be created");
    rater(home.path())
        .arg("-q")
        .arg("-v")
        .arg("industries")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
