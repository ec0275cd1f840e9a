use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;

pub const BIN_NAME: &str = "duesboard_cli";

/// Writes a complete data directory matching the documented shape.
pub fn fixture_data_dir() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let documents = [
        (
            "site.json",
            r#"{"title": "Sunflower Group Treasury", "totalChildren": 5}"#,
        ),
        (
            "collections.json",
            r#"{"collections": [
                {"name": "Trip", "amountPerChild": 10, "status": "open", "paid": [1, 1, 2, 9]},
                {"name": "Photos", "amountPerChild": 15, "paid": [3]}
            ]}"#,
        ),
        (
            "incomes.json",
            r#"{"incomes": [{"source": "Fundraiser", "amount": 50}]}"#,
        ),
        (
            "expenses.json",
            r#"{"expenses": [
                {"date": "2026-05-01", "what": "Paint", "amount": 30, "receipt": "https://example.org/r/1"},
                {"date": "2026-06-15", "what": "Snacks", "amount": 20, "receipt_note": "paper receipt"}
            ]}"#,
        ),
        (
            "banking.json",
            r#"{"account_number": "12 3456 7890", "blik": "600 100 200", "revolut": "@sunflower",
                "transfer_title_template": "Dues - member {nr}"}"#,
        ),
        (
            "events.json",
            r#"{"events": [
                {"title": "Spring meeting", "date": "2020-03-01"},
                {"title": "Picnic", "date": "2099-06-01", "description": "Bring snacks"}
            ]}"#,
        ),
        (
            "information.json",
            r#"{"information": [{"title": "Welcome", "content": "Dues are collected monthly."}]}"#,
        ),
    ];
    for (name, body) in documents {
        dir.child(name).write_str(body).expect("write document");
    }
    dir
}

/// Command against the fixture data, with config isolated under `home`.
pub fn duesboard_cmd(data_dir: &TempDir, home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("DUESBOARD_HOME", home);
    cmd.env_remove("DUESBOARD_DATA_DIR");
    cmd.env("NO_COLOR", "1");
    cmd.arg("--data").arg(data_dir.path());
    cmd
}
