//! Integration tests for the CLI interface
//!
//! Runs the binary against fixture catalogs in a temp directory.

mod common;

use assert_cmd::Command;
use common::{BuiltFixture, CatalogFixture};
use predicates::prelude::*;
use std::path::Path;

const ENV_VARS: &[&str] = &[
    "CATALOG_DASH_CATALOG",
    "CATALOG_DASH_TOP_N",
    "CATALOG_DASH_COUNTRY_MODE",
    "CATALOG_DASH_LOG_LEVEL",
    "RUST_LOG",
];

/// A command isolated from the caller's environment and working directory
fn dash_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("catalog-dash").unwrap();
    cmd.current_dir(dir);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn sample() -> BuiltFixture {
    CatalogFixture::sample().unwrap().build().unwrap()
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_cli_help_flag() {
    let fixture = sample();
    dash_cmd(fixture.dir())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("directors"));
}

#[test]
fn test_default_command_prints_report() {
    // netflix1.csv in the working directory is the default catalog
    let fixture = sample();
    dash_cmd(fixture.dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("Continents: all"))
        .stdout(predicate::str::contains("Movies vs TV Shows"))
        .stdout(predicate::str::contains("Top Directors"))
        .stdout(predicate::str::contains("Titles per Continent"));
}

#[test]
fn test_types_json_for_selected_continent() {
    let fixture = sample();
    let value = json_stdout(
        dash_cmd(fixture.dir()).args(["types", "--continent", "africa", "-f", "json"]),
    );

    assert_eq!(
        value,
        serde_json::json!([{ "type": "TV Show", "count": 1 }])
    );
}

#[test]
fn test_directors_skip_uncredited_and_respect_top_n() {
    let fixture = sample();
    dash_cmd(fixture.dir())
        .args(["directors", "--top-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dennis Dugan"))
        .stdout(predicate::str::contains("Julien Leclercq"))
        .stdout(predicate::str::contains("Haile Gerima").not())
        .stdout(predicate::str::contains("Not Given").not());
}

#[test]
fn test_country_mode_flag_changes_classification() {
    let fixture = sample();
    let args = ["countries", "--map-continent", "north-america", "-f", "json"];

    let verbatim = json_stdout(dash_cmd(fixture.dir()).args(args));
    assert_eq!(verbatim[0]["country"], "United States");
    assert_eq!(verbatim[0]["count"], 3);

    let first = json_stdout(
        dash_cmd(fixture.dir())
            .args(args)
            .args(["--country-mode", "first-country"]),
    );
    assert_eq!(first[0]["count"], 4);
}

#[test]
fn test_first_country_mode_maps_leading_country() {
    let fixture = CatalogFixture::new()
        .unwrap()
        .with_rows(&[
            r#"s1,Movie,Atlantiques,Mati Diop,"Senegal, France",11/29/2019,2019,TV-14,106 min,Dramas"#,
        ])
        .build()
        .unwrap();
    let args = ["countries", "--map-continent", "africa", "-f", "json"];

    let verbatim = json_stdout(dash_cmd(fixture.dir()).args(args));
    assert_eq!(verbatim, serde_json::json!([]));

    let first = json_stdout(
        dash_cmd(fixture.dir())
            .args(args)
            .args(["--country-mode", "first-country"]),
    );
    assert_eq!(first[0]["country"], "Senegal");
    assert_eq!(first[0]["count"], 1);
}

#[test]
fn test_countries_all_counts_unclassifiable_values() {
    let fixture = sample();
    dash_cmd(fixture.dir())
        .args(["countries", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Atlantis"));
}

#[test]
fn test_config_file_in_working_dir() {
    let fixture = CatalogFixture::sample()
        .unwrap()
        .with_config("top_n = 1\ncountry_mode = \"first-country\"\n")
        .build()
        .unwrap();

    let value = json_stdout(dash_cmd(fixture.dir()).args(["categories", "-f", "json"]));
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["type"], "Movie");
    assert_eq!(rows[0]["category"], "Comedies");
    assert_eq!(rows[1]["type"], "TV Show");
    assert_eq!(rows[1]["category"], "International TV Shows");
}

#[test]
fn test_env_var_selects_catalog() {
    let fixture = sample();
    let elsewhere = tempfile::TempDir::new().unwrap();

    dash_cmd(elsewhere.path())
        .env("CATALOG_DASH_CATALOG", &fixture.catalog_path)
        .args(["ratings", "--show", "tv-show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TV-MA"))
        .stdout(predicate::str::contains("PG-13").not());
}

#[test]
fn test_options_lists_categories() {
    let fixture = sample();
    dash_cmd(fixture.dir())
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("Anime Features"))
        .stdout(predicate::str::contains("Show: Both, Movie, TV Show"));
}

#[test]
fn test_missing_catalog_exits_with_catalog_code() {
    let elsewhere = tempfile::TempDir::new().unwrap();
    dash_cmd(elsewhere.path())
        .arg("types")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Catalog file not found"));
}

#[test]
fn test_unknown_show_type_exits_with_catalog_code() {
    let fixture = CatalogFixture::new()
        .unwrap()
        .with_rows(&["s1,Podcast,Serial,Sarah Koenig,United States,1/1/2020,2014,NR,12 ep,Crime"])
        .build()
        .unwrap();

    dash_cmd(fixture.dir())
        .arg("types")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Podcast"));
}

#[test]
fn test_invalid_top_n_is_config_error() {
    let fixture = sample();
    dash_cmd(fixture.dir())
        .args(["directors", "--top-n", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("top_n"));
}

#[test]
fn test_unknown_continent_is_usage_error() {
    let fixture = sample();
    dash_cmd(fixture.dir())
        .args(["trend", "--continent", "Lemuria"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown continent 'Lemuria'"));
}
