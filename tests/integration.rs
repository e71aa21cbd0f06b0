//! End-to-end tests for the payroll register.
//!
//! This test suite drives the real menu loop over scripted console input
//! and a temporary roster file, covering:
//! - The add/display/total menu flows and their console transcripts
//! - Field-level retry loops for every validated input
//! - Persistence round trips, role filtering, and malformed-line handling
//! - Session-to-session survival of the roster

use std::fs;
use std::io::Cursor;
use std::str::FromStr;

use rust_decimal::Decimal;
use tempfile::TempDir;

use payroll_register::app::App;
use payroll_register::models::{Employee, Role};
use payroll_register::roster::Roster;
use payroll_register::store::RosterStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn temp_store() -> (TempDir, RosterStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = RosterStore::new(dir.path().join("employees.txt"));
    (dir, store)
}

/// Runs one full console session over `script` and returns the transcript.
fn run_session(store: &RosterStore, script: &str) -> String {
    let mut output = Vec::new();
    let app = App::new(store.clone(), Cursor::new(script.to_string()), &mut output)
        .expect("Failed to load roster at startup");
    app.run().expect("Session failed");
    String::from_utf8(output).expect("Transcript was not UTF-8")
}

fn employee(
    name: &str,
    id: i64,
    role: Role,
    basic: &str,
    allowances: &str,
    deductions: &str,
) -> Employee {
    Employee::new(name, id, role, dec(basic), dec(allowances), dec(deductions))
}

// =============================================================================
// Menu Flow
// =============================================================================

#[test]
fn test_menu_redisplays_after_each_action() {
    let (_dir, store) = temp_store();
    let transcript = run_session(&store, "3\n2\n4\n");

    assert_eq!(transcript.matches("Employee Payroll System").count(), 3);
    assert_eq!(transcript.matches("Enter your choice: ").count(), 3);
}

#[test]
fn test_invalid_menu_choice_keeps_the_loop_alive() {
    let (_dir, store) = temp_store();
    let transcript = run_session(&store, "0\nhelp\n4\n");

    assert_eq!(transcript.matches("Invalid choice! Try again.").count(), 2);
}

#[test]
fn test_menu_choice_is_matched_exactly() {
    let (_dir, store) = temp_store();
    // Padded input is not a valid choice.
    let transcript = run_session(&store, " 1\n4\n");

    assert!(transcript.contains("Invalid choice! Try again."));
    assert!(!transcript.contains("Enter Name: "));
}

// =============================================================================
// Add / Display / Total
// =============================================================================

#[test]
fn test_full_scenario_add_display_total() {
    let (_dir, store) = temp_store();
    let transcript = run_session(
        &store,
        "1\nAlice\n1\nManager\n5000\n500\n200\n2\n3\n4\n",
    );

    assert!(transcript.contains("Employee added successfully!"));
    assert!(transcript.contains("Employee List:"));
    assert!(transcript.contains("ID: 1, Name: Alice, Role: Manager, Salary: 5300.00"));
    assert!(transcript.contains("Total Payroll: 5300.00"));
}

#[test]
fn test_display_on_empty_roster_reports_none() {
    let (_dir, store) = temp_store();
    let transcript = run_session(&store, "2\n4\n");

    assert!(transcript.contains("No employees found."));
    assert!(!transcript.contains("Employee List:"));
    assert!(!transcript.contains("ID:"));
}

#[test]
fn test_display_lists_employees_in_insertion_order() {
    let (_dir, store) = temp_store();
    let transcript = run_session(
        &store,
        "1\nZoe\n9\nintern\n100\n0\n0\n1\nAdam\n3\ndeveloper\n200\n0\n0\n2\n4\n",
    );

    let zoe = transcript.find("Name: Zoe").expect("Zoe not displayed");
    let adam = transcript.find("Name: Adam").expect("Adam not displayed");
    assert!(zoe < adam, "Display order should match insertion order");
}

#[test]
fn test_total_payroll_on_empty_roster_is_zero() {
    let (_dir, store) = temp_store();
    let transcript = run_session(&store, "3\n4\n");

    assert!(transcript.contains("Total Payroll: 0.00"));
}

#[test]
fn test_total_payroll_sums_two_employees() {
    let (_dir, store) = temp_store();
    let transcript = run_session(
        &store,
        "1\nAna\n1\nmanager\n1000\n200\n50\n1\nBen\n2\nintern\n500\n0\n0\n3\n4\n",
    );

    assert!(transcript.contains("Total Payroll: 1650.00"));
}

#[test]
fn test_role_entry_is_case_insensitive() {
    let (_dir, store) = temp_store();
    let transcript = run_session(
        &store,
        "1\nCara\n5\nDEVELOPER\n900\n0\n0\n2\n4\n",
    );

    assert!(transcript.contains("ID: 5, Name: Cara, Role: Developer, Salary: 900.00"));
}

// =============================================================================
// Field Retry Loops
// =============================================================================

#[test]
fn test_name_retry_accepts_only_the_valid_attempt() {
    let (_dir, store) = temp_store();
    let transcript = run_session(
        &store,
        "1\n123\n\nJo3\nJohn Doe\n7\nintern\n100\n0\n0\n4\n",
    );

    assert_eq!(
        transcript
            .matches("Invalid input! Name should only contain alphabets and spaces.")
            .count(),
        3
    );

    let saved = store.load().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved.all()[0].name, "John Doe");
}

#[test]
fn test_id_retry_then_negative_id_accepted() {
    let (_dir, store) = temp_store();
    let transcript = run_session(
        &store,
        "1\nBob\nx1\n-3\ndeveloper\n100\n0\n0\n4\n",
    );

    assert!(transcript.contains("Invalid input! ID must be a number."));
    assert_eq!(store.load().unwrap().all()[0].id, -3);
}

#[test]
fn test_role_retry_until_recognized() {
    let (_dir, store) = temp_store();
    let transcript = run_session(
        &store,
        "1\nEve\n4\nboss\ncontractor\nManager\n100\n0\n0\n4\n",
    );

    assert_eq!(
        transcript
            .matches("Invalid role! Please enter Manager, Developer, or Intern.")
            .count(),
        2
    );
    assert_eq!(store.load().unwrap().all()[0].role, Role::Manager);
}

#[test]
fn test_each_pay_field_rejects_negatives_independently() {
    let (_dir, store) = temp_store();
    let transcript = run_session(
        &store,
        "1\nDan\n6\nintern\n-1\n100\n-2\n20\n-3\n5\n4\n",
    );

    assert!(transcript.contains("Invalid input! Basic Pay must be a non-negative number."));
    assert!(transcript.contains("Invalid input! Allowances must be a non-negative number."));
    assert!(transcript.contains("Invalid input! Deductions must be a non-negative number."));

    let saved = store.load().unwrap();
    assert_eq!(saved.all()[0].salary(), dec("115"));
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_save_then_load_round_trips_in_order() {
    let (_dir, store) = temp_store();
    let mut roster = Roster::new();
    roster.add(employee("Alice", 1, Role::Manager, "5000", "500", "200"));
    roster.add(employee("Bob Lee", 2, Role::Developer, "3200.50", "0", "150.25"));
    roster.add(employee("Cara", 2, Role::Intern, "100", "0", "0"));

    store.save(&roster).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, roster);
}

#[test]
fn test_loading_nonexistent_path_yields_empty_roster() {
    let (_dir, store) = temp_store();
    let roster = store.load().expect("Missing file should not be an error");
    assert!(roster.is_empty());
}

#[test]
fn test_exit_persists_the_expected_line_format() {
    let (_dir, store) = temp_store();
    run_session(&store, "1\nAlice\n1\nManager\n5000\n500\n200\n4\n");

    let content = fs::read_to_string(store.path()).unwrap();
    assert_eq!(content, "1,Alice,Manager,5000,500,200\n");
}

#[test]
fn test_lines_with_unknown_role_are_dropped_on_load() {
    let (_dir, store) = temp_store();
    fs::write(
        store.path(),
        "1,Alice,Manager,5000,500,200\n\
         2,Eve,Contractor,100,0,0\n\
         3,Bob,developer,900,0,0\n",
    )
    .unwrap();

    let transcript = run_session(&store, "2\n4\n");

    assert!(transcript.contains("Name: Alice"));
    assert!(transcript.contains("Name: Bob"));
    assert!(!transcript.contains("Name: Eve"));
}

#[test]
fn test_malformed_lines_are_skipped_without_aborting() {
    let (_dir, store) = temp_store();
    fs::write(
        store.path(),
        "1,Alice,Manager,5000,500,200\n\
         garbage\n\
         2,Eve,Manager,abc,0,0\n\
         3,Bob,Developer,900,0,0\n",
    )
    .unwrap();

    let roster = store.load().expect("Malformed lines must not abort the load");
    let ids: Vec<i64> = roster.all().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_roster_survives_across_sessions() {
    let (_dir, store) = temp_store();
    run_session(&store, "1\nAlice\n1\nManager\n5000\n500\n200\n4\n");
    run_session(&store, "1\nBob\n2\ndeveloper\n3000\n0\n100\n4\n");
    let transcript = run_session(&store, "2\n3\n4\n");

    assert!(transcript.contains("ID: 1, Name: Alice, Role: Manager, Salary: 5300.00"));
    assert!(transcript.contains("ID: 2, Name: Bob, Role: Developer, Salary: 2900.00"));
    assert!(transcript.contains("Total Payroll: 8200.00"));
}

#[test]
fn test_end_of_input_abandons_partial_add_but_saves() {
    let (_dir, store) = temp_store();
    run_session(&store, "1\nAlice\n1\nManager\n5000\n500\n200\n4\n");

    // Second session dies mid-Add; the existing roster must survive.
    run_session(&store, "1\nBob\n2\n");

    let saved = store.load().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved.all()[0].name, "Alice");
}
