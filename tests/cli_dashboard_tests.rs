mod common;

use predicates::str::contains;

use common::{duesboard_cmd, fixture_data_dir};

#[test]
fn show_renders_every_section() {
    let data = fixture_data_dir();
    let home = tempfile::tempdir().expect("home dir");

    // Collections collect 20 (open) + 15 (closed), incomes add 50,
    // expenses subtract 50.
    duesboard_cmd(&data, home.path())
        .arg("show")
        .assert()
        .success()
        .stdout(contains("Sunflower Group Treasury"))
        .stdout(contains("35.00 PLN"))
        .stdout(contains("Open collections"))
        .stdout(contains("Trip"))
        .stdout(contains("Paid: 2/5 (40%)"))
        .stdout(contains("Collected: 20.00 PLN"))
        .stdout(contains("Closed collections"))
        .stdout(contains("Photos"))
        .stdout(contains("Paint"))
        .stdout(contains("paper receipt"))
        .stdout(contains("Picnic"))
        .stdout(contains("days to the event"))
        .stdout(contains("Dues are collected monthly."))
        .stdout(contains("Dues - member 8"));
}

#[test]
fn balance_section_lists_the_breakdown() {
    let data = fixture_data_dir();
    let home = tempfile::tempdir().expect("home dir");

    duesboard_cmd(&data, home.path())
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("Collections income: 35.00 PLN"))
        .stdout(contains("Other income - Fundraiser: 50.00 PLN"))
        .stdout(contains("Total expenses: - 50.00 PLN"));
}

#[test]
fn expenses_render_newest_first() {
    let data = fixture_data_dir();
    let home = tempfile::tempdir().expect("home dir");

    let output = duesboard_cmd(&data, home.path())
        .arg("expenses")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf-8 output");
    let snacks = stdout.find("Snacks").expect("snacks row");
    let paint = stdout.find("Paint").expect("paint row");
    assert!(snacks < paint, "2026-06-15 must render before 2026-05-01");
}

#[test]
fn data_dir_env_var_is_honored() {
    let data = fixture_data_dir();
    let home = tempfile::tempdir().expect("home dir");

    assert_cmd::Command::cargo_bin(common::BIN_NAME)
        .expect("binary exists")
        .env("DUESBOARD_HOME", home.path())
        .env("DUESBOARD_DATA_DIR", data.path())
        .env("NO_COLOR", "1")
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("Collections income: 35.00 PLN"));
}

#[test]
fn missing_document_fails_with_one_error() {
    let data = fixture_data_dir();
    let home = tempfile::tempdir().expect("home dir");
    std::fs::remove_file(data.path().join("collections.json")).expect("remove document");

    duesboard_cmd(&data, home.path())
        .arg("show")
        .assert()
        .failure()
        .stderr(contains("collections.json"));
}

#[test]
fn unknown_command_suggests_the_nearest_one() {
    let data = fixture_data_dir();
    let home = tempfile::tempdir().expect("home dir");

    duesboard_cmd(&data, home.path())
        .arg("lokup")
        .assert()
        .failure()
        .stderr(contains("Suggestion: `lookup`?"))
        .stderr(contains("unknown command `lokup`"));
}
