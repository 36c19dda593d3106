//! Integration tests for the `apps`, `url` and `route` subcommands.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::{tempdir, TempDir};

fn cli() -> Command {
    cargo_bin_cmd!("navrouter-cli")
}

/// Command with a neutral environment: empty config file, no colors, no
/// apps installed unless a test passes `--installed`.
fn prepare_command() -> (Command, TempDir) {
    let temp_dir = tempdir().expect("create temp dir");
    let config = temp_dir.path().join("config.json");
    fs::write(&config, "{}").expect("write config");

    let mut cmd = cli();
    cmd.env("NAVROUTER_CONFIG", &config)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .env_remove("NAVROUTER_INSTALLED");
    (cmd, temp_dir)
}

#[test]
fn apps_lists_catalog_with_installed_flags() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["apps", "--installed", "waze"]);

    cmd.assert()
        .success()
        .stdout(contains("Supported navigation apps (3):"))
        .stdout(contains("Google Maps"))
        .stdout(contains("comgooglemaps://"))
        .stdout(contains("citymapper://"))
        .stdout(predicate::str::is_match(r"waze\s+Waze\s+waze://\s+yes\s+yes").unwrap());
}

#[test]
fn apps_reads_installed_from_environment() {
    let (mut cmd, _temp) = prepare_command();
    cmd.env("NAVROUTER_INSTALLED", "citymapper").arg("apps");

    cmd.assert()
        .success()
        .stdout(predicate::str::is_match(r"citymapper\s+Citymapper\s+citymapper://\s+no\s+yes").unwrap());
}

#[test]
fn url_prints_waze_coordinate_link() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["url", "--app", "waze", "--lat", "45.5017", "--lon", "-73.5673"]);

    cmd.assert()
        .success()
        .stdout("waze://?ll=45.5017,-73.5673&navigate=yes\n");
}

#[test]
fn url_prints_google_maps_address_link() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["url", "--app", "google-maps", "--address", "123 Main St"]);

    cmd.assert()
        .success()
        .stdout("comgooglemaps://?q=123+Main+St\n");
}

#[test]
fn url_rejects_address_for_citymapper() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["url", "--app", "citymapper", "--address", "Trafalgar Square"]);

    cmd.assert()
        .failure()
        .stderr(contains("citymapper cannot route to a destination given as address"));
}

#[test]
fn url_rejects_unknown_app() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["url", "--app", "here-we-go", "--lat", "1", "--lon", "2"]);

    cmd.assert()
        .failure()
        .stderr(contains("unknown navigation app: here-we-go"));
}

#[test]
fn url_rejects_out_of_range_coordinate() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["url", "--app", "waze", "--lat", "123", "--lon", "2"]);

    cmd.assert().failure().stderr(contains("invalid --lat/--lon"));
}

#[test]
fn route_without_installed_apps_uses_built_in_maps() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args([
        "route",
        "--dry-run",
        "--lat",
        "45.5017",
        "--lon",
        "-73.5673",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("Navigate with").not())
        .stdout(contains(
            "Would open built-in maps: http://maps.apple.com/?daddr=45.5017,-73.5673&dirflg=d",
        ));
}

#[test]
fn route_with_preset_choice_opens_selected_app() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args([
        "route",
        "--dry-run",
        "--installed",
        "google-maps,waze",
        "--address",
        "123 Main St",
        "--choice",
        "waze",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("Navigate with"))
        .stdout(contains("1. Plans (default)"))
        .stdout(contains("2. Google Maps (google-maps)"))
        .stdout(contains("3. Waze (waze)"))
        .stdout(contains("4. Cancel (cancel)"))
        .stdout(contains("Would open Waze: waze://?q=123%20Main%20St"));
}

#[test]
fn route_reads_selection_from_stdin() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args([
        "route",
        "--dry-run",
        "--installed",
        "citymapper",
        "--lat",
        "51.5074",
        "--lon",
        "-0.1278",
    ])
    .write_stdin("2\n");

    cmd.assert().success().stdout(contains(
        "Would open Citymapper: citymapper://directions?endcoord=51.5074,-0.1278",
    ));
}

#[test]
fn route_cancel_opens_nothing() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args([
        "route",
        "--dry-run",
        "--installed",
        "waze",
        "--lat",
        "1",
        "--lon",
        "2",
        "--choice",
        "cancel",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("Cancelled"))
        .stdout(contains("Would open").not());
}

#[test]
fn route_closed_stdin_dismisses_sheet() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args([
        "route",
        "--dry-run",
        "--installed",
        "waze",
        "--lat",
        "1",
        "--lon",
        "2",
    ])
    .write_stdin("");

    cmd.assert()
        .success()
        .stdout(contains("Cancelled"))
        .stdout(contains("Would open").not());
}

#[test]
fn route_address_mode_hides_citymapper() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args([
        "route",
        "--dry-run",
        "--installed",
        "citymapper,waze",
        "--address",
        "10 Downing St",
        "--choice",
        "default",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("Citymapper").not())
        .stdout(contains(
            "Would open built-in maps: http://maps.apple.com/?address=10+Downing+St",
        ));
}

#[test]
fn route_address_with_only_citymapper_still_offers_sheet() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args([
        "route",
        "--dry-run",
        "--installed",
        "citymapper",
        "--address",
        "10 Downing St",
        "--choice",
        "cancel",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("Navigate with"))
        .stdout(contains("1. Plans (default)"))
        .stdout(contains("2. Cancel (cancel)"))
        .stdout(contains("Citymapper").not())
        .stdout(contains("Cancelled"))
        .stdout(contains("Would open").not());
}

#[test]
fn route_blank_address_is_ignored() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["route", "--dry-run", "--installed", "waze", "--address", "   "]);

    cmd.assert()
        .success()
        .stdout(contains("Navigate with").not())
        .stderr(contains("Nothing to route: address is empty"));
}

#[test]
fn route_uses_configured_labels() {
    let (mut cmd, temp) = prepare_command();
    let config = temp.path().join("fr.json");
    fs::write(
        &config,
        r#"{ "sheet_title": "Y aller avec", "cancel_label": "Annuler" }"#,
    )
    .expect("write config");

    cmd.arg("--config").arg(&config).args([
        "route",
        "--dry-run",
        "--installed",
        "waze",
        "--lat",
        "1",
        "--lon",
        "2",
        "--choice",
        "cancel",
    ]);

    cmd.assert()
        .success()
        .stdout(contains("Y aller avec"))
        .stdout(contains("Annuler (cancel)"));
}

#[test]
fn route_geocodes_coordinate_with_places_table() {
    let (mut cmd, temp) = prepare_command();
    let places = temp.path().join("places.json");
    fs::write(
        &places,
        r#"{
            "tolerance": 0.01,
            "placemarks": [
                {
                    "coordinate": { "latitude": 48.8584, "longitude": 2.2945 },
                    "name": "Tour Eiffel",
                    "address": "5 Avenue Anatole France, Paris"
                }
            ]
        }"#,
    )
    .expect("write places");

    cmd.args(["route", "--dry-run", "--lat", "48.858", "--lon", "2.295"])
        .arg("--places")
        .arg(&places);

    cmd.assert().success().stdout(contains(
        "Would open built-in maps: http://maps.apple.com/?daddr=48.8584,2.2945&dirflg=d&q=Tour%20Eiffel",
    ));
}

#[test]
fn route_without_nearby_place_routes_nothing() {
    let (mut cmd, temp) = prepare_command();
    let places = temp.path().join("places.json");
    fs::write(&places, r#"{ "tolerance": 0.01, "placemarks": [] }"#).expect("write places");

    cmd.args(["route", "--dry-run", "--lat", "10", "--lon", "10"])
        .arg("--places")
        .arg(&places);

    cmd.assert()
        .success()
        .stdout(contains("Would open").not())
        .stderr(contains("No place found near (10, 10)"));
}

#[test]
fn missing_explicit_config_fails() {
    let (mut cmd, temp) = prepare_command();
    cmd.arg("--config")
        .arg(temp.path().join("absent.json"))
        .args(["route", "--dry-run", "--lat", "1", "--lon", "2"]);

    cmd.assert()
        .failure()
        .stderr(contains("failed to load configuration"));
}
