//! Tests for the interactive menu, driven by scripted input

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use coursecat::application::services::CatalogService;
use coursecat::application::Session;
use coursecat::cli::menu::{Menu, GOODBYE, INVALID_OPTION, NOT_FOUND, NOT_LOADED};
use coursecat::infrastructure::traits::RealFileSystem;

const CATALOG: &str = "\
CSCI300,Introduction to Algorithms,CSCI200,MATH201
CSCI100,Introduction to Computer Science
CSCI200,Data Structures,CSCI101
";

fn create_catalog(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("catalog.csv");
    std::fs::write(&path, content).expect("write catalog file");
    path
}

/// Runs the menu over `script` and returns everything it printed.
fn run_script(catalog_file: &Path, script: &str, session: &mut Session) -> String {
    colored::control::set_override(false);
    let service = CatalogService::new(Arc::new(RealFileSystem), 2);
    let mut out = Vec::new();
    Menu::new(&service, catalog_file, script.as_bytes(), &mut out)
        .run(session)
        .expect("menu run");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn given_load_then_list_when_running_menu_then_prints_courses_in_order() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, CATALOG);
    let mut session = Session::new();

    let output = run_script(&path, "1\n2\n9\n", &mut session);

    assert!(output.contains("Menu Options:"));
    assert!(output.contains("Courses successfully loaded from file."));
    assert!(output.contains("Printing all courses in alphanumeric order..."));
    let first = output.find("CSCI100: Introduction to Computer Science").unwrap();
    let second = output.find("CSCI200: Data Structures").unwrap();
    let third = output.find("CSCI300: Introduction to Algorithms").unwrap();
    assert!(first < second && second < third);
    assert!(output.contains("Prerequisites: None"));
    assert!(output.contains("Prerequisites: CSCI200 MATH201"));
    assert!(output.trim_end().ends_with(GOODBYE));
    assert_eq!(session.index().len(), 3);
}

#[test]
fn given_show_before_load_when_running_menu_then_asks_to_load_first() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, CATALOG);
    let mut session = Session::new();

    let output = run_script(&path, "2\n3\n9\n", &mut session);

    assert_eq!(output.matches(NOT_LOADED).count(), 2);
    assert!(!output.contains("Enter the course number"));
}

#[test]
fn given_course_number_when_showing_then_prints_details_or_not_found() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, CATALOG);
    let mut session = Session::new();

    let output = run_script(&path, "1\n3\n  CSCI200  \n3\nCSCI999\n9\n", &mut session);

    assert!(output.contains("CSCI200: Data Structures\nPrerequisites: CSCI101\n"));
    assert!(output.contains(NOT_FOUND));
}

#[test]
fn given_lowercase_course_number_when_showing_then_not_found() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, CATALOG);
    let mut session = Session::new();

    let output = run_script(&path, "1\n3\ncsci100\n9\n", &mut session);

    assert!(output.contains(NOT_FOUND));
}

#[test]
fn given_invalid_choice_when_running_menu_then_reprompts() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, CATALOG);
    let mut session = Session::new();

    let output = run_script(&path, "7\nhello\n9\n", &mut session);

    assert_eq!(output.matches(INVALID_OPTION).count(), 2);
    assert_eq!(output.matches("Enter your choice:").count(), 3);
}

#[test]
fn given_input_ends_when_running_menu_then_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, CATALOG);
    let mut session = Session::new();

    let output = run_script(&path, "1\n3\n", &mut session);

    assert!(output.trim_end().ends_with(GOODBYE));
    assert!(session.is_loaded());
}

#[test]
fn given_missing_catalog_when_loading_from_menu_then_reports_error_and_continues() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.csv");
    let mut session = Session::new();

    let output = run_script(&path, "1\n2\n9\n", &mut session);

    assert!(output.contains("Error: catalog file not found"));
    assert!(output.contains(NOT_LOADED));
}

#[test]
fn given_malformed_lines_when_loading_from_menu_then_prints_each_invalid_line() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, "CSCI100,Intro\nBROKEN\n,Nothing\n");
    let mut session = Session::new();

    let output = run_script(&path, "1\n9\n", &mut session);

    assert!(output.contains("Error: Invalid format in line: BROKEN"));
    assert!(output.contains("Error: Invalid format in line: ,Nothing"));
    assert!(output.contains("1 course(s) in catalog."));
}

#[test]
fn given_load_chosen_twice_when_listing_then_courses_are_not_repeated() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, CATALOG);
    let mut session = Session::new();

    let output = run_script(&path, "1\n1\n2\n9\n", &mut session);

    assert_eq!(output.matches("CSCI100: Introduction to Computer Science").count(), 1);
    assert_eq!(session.index().len(), 3);
}

#[test]
fn given_blank_lines_at_course_prompt_when_showing_then_waits_for_course_number() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, CATALOG);
    let mut session = Session::new();

    let output = run_script(&path, "1\n3\n\n   \nCSCI200\n9\n", &mut session);

    assert!(output.contains("CSCI200: Data Structures\nPrerequisites: CSCI101\n"));
    assert!(!output.contains(NOT_FOUND));
    assert_eq!(output.matches("Enter the course number to search:").count(), 1);
}

#[test]
fn given_only_blank_lines_at_course_prompt_when_input_ends_then_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, CATALOG);
    let mut session = Session::new();

    let output = run_script(&path, "1\n3\n\n\n", &mut session);

    assert!(!output.contains(NOT_FOUND));
    assert!(output.trim_end().ends_with(GOODBYE));
}

#[test]
fn given_choice_and_course_on_one_line_when_running_menu_then_option_is_invalid() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, CATALOG);
    let mut session = Session::new();

    let output = run_script(&path, "1\n3 CSCI100\n9\n", &mut session);

    assert!(output.contains(INVALID_OPTION));
    assert!(!output.contains("Enter the course number to search:"));
}

#[test]
fn given_malformed_lines_when_loading_from_menu_then_report_lines_are_in_order() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog(&temp, "BROKEN\nCSCI100,Intro\n");
    let mut session = Session::new();

    let output = run_script(&path, "1\n9\n", &mut session);

    assert!(output.contains(
        "Loading file data...\n\
         Error: Invalid format in line: BROKEN\n\
         Courses successfully loaded from file.\n\
         Data successfully loaded! 1 course(s) in catalog.\n"
    ));
}
