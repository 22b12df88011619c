//! End-to-end tests for the budgetbook binary
//!
//! Each test runs the real binary against an isolated data directory
//! (via the BUDGETBOOK_DATA_DIR override) and drives the interactive menu
//! over piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budgetbook(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budgetbook").unwrap();
    cmd.env("BUDGETBOOK_DATA_DIR", dir.path());
    cmd
}

fn ledger_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("data").join("budget.txt")
}

fn init(dir: &TempDir) {
    budgetbook(dir).arg("init").assert().success();
}

#[test]
fn missing_ledger_file_fails_at_startup() {
    let dir = TempDir::new().unwrap();

    budgetbook(&dir)
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("budget.txt"));
}

#[test]
fn init_creates_an_empty_ledger() {
    let dir = TempDir::new().unwrap();

    budgetbook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(ledger_path(&dir).exists());
    assert_eq!(std::fs::read_to_string(ledger_path(&dir)).unwrap(), "");

    // Idempotent
    budgetbook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    budgetbook(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Max transactions: 100"));
}

#[test]
fn quit_immediately_succeeds() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    budgetbook(&dir)
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saving and quitting."));
}

#[test]
fn invalid_menu_token_redisplays_the_menu() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    budgetbook(&dir)
        .write_stdin("9\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid option entered. Please try again.",
        ));
}

#[test]
fn create_list_update_delete_scenario() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    // Create one transaction, then list it
    budgetbook(&dir)
        .write_stdin("1\n01/01/2022\n50.00\n1\nGift\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record was successfully added."))
        .stdout(predicate::str::contains("Gift"));

    assert_eq!(
        std::fs::read_to_string(ledger_path(&dir)).unwrap(),
        "01/01/2022|50.00|1|Gift|\n"
    );

    // Update the type of record 1 from credit to debit; amount unchanged
    budgetbook(&dir)
        .write_stdin("3\n1\n3\n0\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record 1 successfully updated!"));

    assert_eq!(
        std::fs::read_to_string(ledger_path(&dir)).unwrap(),
        "01/01/2022|50.00|0|Gift|\n"
    );

    // Delete record 1 with confirmation
    budgetbook(&dir)
        .write_stdin("4\n1\nY\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record 1 successfully deleted!"));

    assert_eq!(std::fs::read_to_string(ledger_path(&dir)).unwrap(), "");

    // Listing afterwards shows the header and no data rows
    budgetbook(&dir)
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Description"))
        .stdout(predicate::str::contains("Gift").not());
}

#[test]
fn cancelling_create_leaves_the_file_unchanged() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    budgetbook(&dir)
        .write_stdin("1\n01/01/2022\nb\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Transaction has been successfully discarded.",
        ));

    assert_eq!(std::fs::read_to_string(ledger_path(&dir)).unwrap(), "");
}

#[test]
fn declining_delete_confirmation_keeps_the_record() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    budgetbook(&dir)
        .write_stdin("1\n01/01/2022\n50.00\n1\nGift\n5\n")
        .assert()
        .success();

    budgetbook(&dir)
        .write_stdin("4\n1\nn\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction will not be deleted."));

    assert_eq!(
        std::fs::read_to_string(ledger_path(&dir)).unwrap(),
        "01/01/2022|50.00|1|Gift|\n"
    );
}

#[test]
fn oversized_ledger_file_is_refused_at_startup() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    // Lower the capacity, then write one more record than it allows
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"schema_version":1,"max_transactions":2}"#,
    )
    .unwrap();
    std::fs::write(
        ledger_path(&dir),
        "01/01/2022|1.00|0|One|\n01/02/2022|2.00|0|Two|\n01/03/2022|3.00|0|Three|\n",
    )
    .unwrap();

    budgetbook(&dir)
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity"));

    // The refused file is left exactly as it was
    assert_eq!(
        std::fs::read_to_string(ledger_path(&dir)).unwrap(),
        "01/01/2022|1.00|0|One|\n01/02/2022|2.00|0|Two|\n01/03/2022|3.00|0|Three|\n"
    );
}

#[test]
fn ledger_at_exact_capacity_loads_and_rejects_create() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    std::fs::write(
        dir.path().join("config.json"),
        r#"{"schema_version":1,"max_transactions":2}"#,
    )
    .unwrap();
    std::fs::write(
        ledger_path(&dir),
        "01/01/2022|1.00|0|One|\n01/02/2022|2.00|0|Two|\n",
    )
    .unwrap();

    budgetbook(&dir)
        .write_stdin("1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No more transactions can be added.",
        ));
}

#[test]
fn file_flag_overrides_the_default_ledger_path() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    let custom = dir.path().join("elsewhere.txt");
    std::fs::write(&custom, "01/01/2022|5.00|0|Elsewhere|\n").unwrap();

    budgetbook(&dir)
        .arg("--file")
        .arg(&custom)
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Elsewhere"));
}

#[test]
fn mutations_are_audit_logged() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    budgetbook(&dir)
        .write_stdin("1\n01/01/2022\n50.00\n1\nGift\n4\n1\ny\n5\n")
        .assert()
        .success();

    let audit = std::fs::read_to_string(dir.path().join("audit.log")).unwrap();
    let lines: Vec<&str> = audit.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"create\""));
    assert!(lines[1].contains("\"delete\""));
}
