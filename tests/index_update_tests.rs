mod common;

use common::{config, read_lines, run_session, write_index};
use jobsite_filtergen::Variant;
use std::fs;
use tempfile::TempDir;

#[test]
fn first_update_creates_index_and_normalizes_names() {
    let dir = TempDir::new().unwrap();
    let out = run_session(
        config(&dir, Variant::Regex),
        &["1", "  Acme   Corp ", "acme corp", "Globex", "done", ":q"],
    );

    let index = dir.path().join("Job_Company_Filter_INDEX.txt");
    assert_eq!(
        read_lines(&index),
        vec!["Initial filter entry", "Acme Corp", "Globex"]
    );
    assert!(out.contains("Created new"));
    assert!(out.contains("Added 'Acme Corp' to the filter list."));
    assert!(out.contains("Company 'acme corp' already exists in the filter list."));
    assert!(out.contains("Exiting program."));
}

#[test]
fn duplicate_entry_leaves_index_byte_identical() {
    let dir = TempDir::new().unwrap();
    let index = write_index(&dir, &["Acme Corp", "Globex"]);
    let before = fs::read(&index).unwrap();

    let out = run_session(
        config(&dir, Variant::Literal),
        &["1", " ACME  corp", "globex", "DONE", ":q"],
    );

    assert_eq!(fs::read(&index).unwrap(), before);
    assert_eq!(out.matches("already exists").count(), 2);
}

#[test]
fn blank_entry_is_rejected() {
    let dir = TempDir::new().unwrap();
    let index = write_index(&dir, &["Acme"]);

    let out = run_session(config(&dir, Variant::Regex), &["1", "   ", "done", ":q"]);

    assert_eq!(read_lines(&index), vec!["Acme"]);
    assert!(out.contains("Please enter a company name."));
}

#[test]
fn end_of_input_finishes_session() {
    let dir = TempDir::new().unwrap();
    let index = write_index(&dir, &["Acme"]);

    run_session(config(&dir, Variant::Regex), &["1", "Initech"]);

    assert_eq!(read_lines(&index), vec!["Acme", "Initech"]);
}

#[test]
fn main_menu_rejects_unknown_input() {
    let dir = TempDir::new().unwrap();
    let out = run_session(config(&dir, Variant::Regex), &["3", "x", " :q "]);

    assert!(out.contains("Invalid choice. Please enter 1 or 2."));
    assert!(out.contains("Invalid input. Please enter a number or ':q' to quit."));
    assert!(out.contains("Exiting program."));
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}
