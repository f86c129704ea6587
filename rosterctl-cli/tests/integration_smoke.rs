//! Smoke tests for the rosterctl command surface

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use rosterctl_core::Database;

/// Seed a store on disk with the Sales scenario and return its path.
fn seeded_store() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    let db = Database::open(path.clone()).unwrap();
    let sales = db.add_department("Sales").unwrap();
    let rep = db.add_role("Rep", 50000.0, sales.id).unwrap();
    let ann = db.add_employee("Ann", "Lee", rep.id, None).unwrap();
    db.add_employee("Bob", "Cho", rep.id, Some(ann.id)).unwrap();

    (dir, path)
}

fn rosterctl(db_path: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("rosterctl").unwrap();
    cmd.env("ROSTERCTL_DB", db_path);
    cmd
}

// === Help Text ===

#[test]
fn test_view_help() {
    let mut cmd = Command::cargo_bin("rosterctl").unwrap();
    cmd.arg("view").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Which roster table to list"));
}

#[test]
fn test_budget_help() {
    let mut cmd = Command::cargo_bin("rosterctl").unwrap();
    cmd.arg("budget").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("total salary budget"));
}

// === View ===

#[test]
fn test_view_departments_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    rosterctl(&path)
        .args(["view", "departments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No departments yet."));
}

#[test]
fn test_view_employees_lists_seeded_rows() {
    let (_dir, path) = seeded_store();

    rosterctl(&path)
        .args(["view", "employees"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann"))
        .stdout(predicate::str::contains("Bob"))
        .stdout(predicate::str::contains("Sales"))
        .stdout(predicate::str::contains("Ann Lee"));
}

#[test]
fn test_view_departments_json() {
    let (_dir, path) = seeded_store();

    rosterctl(&path)
        .args(["view", "departments", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Sales\""));
}

// === Budget ===

#[test]
fn test_budget_totals_seeded_salaries() {
    let (_dir, path) = seeded_store();

    rosterctl(&path)
        .args(["budget", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales"))
        .stdout(predicate::str::contains("100000"));
}

#[test]
fn test_budget_reports_no_data_distinctly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    rosterctl(&path)
        .args(["budget", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no budget to report"));
}

// === Doctor ===

#[test]
fn test_doctor_reports_counts() {
    let (_dir, path) = seeded_store();

    rosterctl(&path)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Departments: 1"))
        .stdout(predicate::str::contains("Roles: 1"))
        .stdout(predicate::str::contains("Employees: 2"));
}
