use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn load_monitor(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("load-monitor").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

fn seed(dir: &TempDir, contents: &str) {
    fs::write(dir.path().join("appliances.txt"), contents).unwrap();
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    load_monitor(&dir)
        .args(["add", "Fridge", "150", "24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered appliance #1: Fridge"));
    load_monitor(&dir)
        .args(["add", "TV", "100", "5"])
        .assert()
        .success();

    load_monitor(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fridge"))
        .stdout(predicate::str::contains("Total daily energy:   4.10 kWh"));

    let contents = fs::read_to_string(dir.path().join("appliances.txt")).unwrap();
    assert_eq!(contents, "Fridge|150|24\nTV|100|5\n");
}

#[test]
fn duplicate_add_requires_update_flag() {
    let dir = TempDir::new().unwrap();
    seed(&dir, "Fridge|150|24\n");

    load_monitor(&dir)
        .args(["add", " FRIDGE ", "200", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Appliance already exists: FRIDGE"));

    load_monitor(&dir)
        .args(["add", "fridge", "200", "12", "--update"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated appliance #1"));

    let contents = fs::read_to_string(dir.path().join("appliances.txt")).unwrap();
    assert_eq!(contents, "Fridge|200|12\n");
}

#[test]
fn invalid_hours_rejected() {
    let dir = TempDir::new().unwrap();

    load_monitor(&dir)
        .args(["add", "Heater", "2000", "25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hours per day must be between 0 and 24"));

    assert!(!dir.path().join("appliances.txt").exists());
}

#[test]
fn search_matches_and_misses() {
    let dir = TempDir::new().unwrap();
    seed(&dir, "Fridge|150|24\nTV|100|5\n");

    load_monitor(&dir)
        .args(["search", "fri"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fridge"))
        .stdout(predicate::str::contains("TV").not());

    load_monitor(&dir)
        .args(["search", "z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No appliance matches 'z'."));
}

#[test]
fn bill_appends_summary_block() {
    let dir = TempDir::new().unwrap();
    seed(&dir, "Fridge|150|24\nTV|100|5\n");

    load_monitor(&dir)
        .args(["bill", "0.20", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated 30-day cost:  24.60"));

    let log = fs::read_to_string(dir.path().join("billing_summary.txt")).unwrap();
    assert_eq!(
        log,
        "================ BILLING SUMMARY ================\n\
         Tariff: 0.20 per kWh\n\
         Appliances count: 2\n\
         Total daily energy: 4.10 kWh\n\
         Total daily cost:  0.82\n\
         Estimated 30-day energy: 123.00 kWh\n\
         Estimated 30-day cost:  24.60\n\
         =================================================\n\n"
    );
}

#[test]
fn bill_without_save_leaves_log_alone() {
    let dir = TempDir::new().unwrap();
    seed(&dir, "Fridge|150|24\n");

    load_monitor(&dir).args(["bill", "0.5"]).assert().success();

    assert!(!dir.path().join("billing_summary.txt").exists());
}

#[test]
fn bill_rejects_non_positive_tariff() {
    let dir = TempDir::new().unwrap();
    seed(&dir, "Fridge|150|24\n");

    load_monitor(&dir)
        .args(["bill", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tariff must be greater than 0"));
}

#[test]
fn malformed_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    seed(&dir, "Lamp|abc|5\nFridge|150|24\n");

    load_monitor(&dir)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Fridge\""))
        .stdout(predicate::str::contains("Lamp").not());
}

#[test]
fn interactive_menu_session() {
    let dir = TempDir::new().unwrap();

    load_monitor(&dir)
        .write_stdin("1\nKettle\n2200\n0.25\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded appliances: 0"))
        .stdout(predicate::str::contains("Saved."))
        .stdout(predicate::str::contains("Kettle"))
        .stdout(predicate::str::contains("Goodbye!"));

    let contents = fs::read_to_string(dir.path().join("appliances.txt")).unwrap();
    assert_eq!(contents, "Kettle|2200|0.25\n");
}

#[test]
fn menu_exits_cleanly_on_end_of_input() {
    let dir = TempDir::new().unwrap();
    seed(&dir, "Fridge|150|24\n");

    load_monitor(&dir)
        .arg("menu")
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded appliances: 1"))
        .stdout(predicate::str::contains("Invalid choice."))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn config_init_writes_settings() {
    let dir = TempDir::new().unwrap();

    load_monitor(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Max appliances:  100"));

    assert!(dir.path().join("load-monitor.json").exists());
}

#[test]
fn settings_capacity_is_enforced() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("load-monitor.json"), r#"{"max_appliances": 1}"#).unwrap();
    seed(&dir, "Fridge|150|24\n");

    load_monitor(&dir)
        .args(["add", "TV", "100", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Limit reached"));
}

#[test]
fn unusable_settings_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    fs::write(dir.path().join("load-monitor.json"), "{ not json").unwrap();
    load_monitor(&dir)
        .args(["add", "Fridge", "150", "24"])
        .assert()
        .success();

    fs::write(dir.path().join("load-monitor.json"), r#"{"max_appliances": 0}"#).unwrap();
    load_monitor(&dir)
        .args(["add", "TV", "100", "5"])
        .assert()
        .success();

    load_monitor(&dir)
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded appliances: 2"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn non_utf8_menu_input_still_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    load_monitor(&dir)
        .write_stdin(b"1\nFridge\n150\n24\n\xff\n6\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));

    let contents = fs::read_to_string(dir.path().join("appliances.txt")).unwrap();
    assert_eq!(contents, "Fridge|150|24\n");
}
