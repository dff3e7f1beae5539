//! Tests for RosterManager
//!
//! These tests verify:
//! - Add / duplicate detection
//! - Delete by key and delete by name
//! - Update (including failures leaving the roster untouched)
//! - Search by key and by name
//! - Listing order and the explicit empty listing
//! - Stable, standing sort by marks
//! - Load/save through the configured data file

use roster::config::Config;
use roster::record::{Grade, RollNumber};
use roster::roster::{Listing, RosterManager};
use roster::RosterError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn new_manager() -> RosterManager {
    RosterManager::new(Config::default())
}

fn rolls(manager: &RosterManager) -> Vec<RollNumber> {
    manager.roster().iter().map(|s| s.roll_number()).collect()
}

fn manager_with(entries: &[(RollNumber, &str, f64)]) -> RosterManager {
    let mut manager = new_manager();
    for (roll, name, marks) in entries {
        manager
            .add(*roll, *name, format!("{}@x.com", name.to_lowercase()), "CS", *marks)
            .unwrap();
    }
    manager
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_and_search_by_key() {
    let mut manager = new_manager();

    let added = manager.add(1, "Ankit", "a@x.com", "CS", 85.0).unwrap();
    assert_eq!(added.grade(), Grade::A);

    let found = manager.search_by_key(1).unwrap();
    assert_eq!(found.name(), "Ankit");
    assert_eq!(found.grade(), Grade::A);
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_add_distinct_rolls_all_listed_in_insertion_order() {
    let manager = manager_with(&[(30, "C", 50.0), (10, "A", 70.0), (20, "B", 90.0)]);

    match manager.list_all() {
        Listing::Students(students) => {
            let listed: Vec<_> = students.iter().map(|s| s.roll_number()).collect();
            assert_eq!(listed, vec![30, 10, 20]);
        }
        Listing::Empty => panic!("Expected students"),
    }

    for roll in [10, 20, 30] {
        assert_eq!(manager.search_by_key(roll).unwrap().roll_number(), roll);
    }
}

#[test]
fn test_add_duplicate_roll_rejected() {
    let mut manager = new_manager();
    manager.add(1, "Ankit", "a@x.com", "CS", 85.0).unwrap();

    let result = manager.add(1, "Riya", "r@x.com", "IT", 91.0);

    assert!(matches!(result, Err(RosterError::DuplicateKey(1))));
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.search_by_key(1).unwrap().name(), "Ankit");
}

#[test]
fn test_add_duplicate_reported_before_validation() {
    let mut manager = new_manager();
    manager.add(1, "Ankit", "a@x.com", "CS", 85.0).unwrap();

    let result = manager.add(1, "Riya", "r@x.com", "IT", 500.0);

    assert!(matches!(result, Err(RosterError::DuplicateKey(1))));
}

#[test]
fn test_add_invalid_marks_rejected() {
    let mut manager = new_manager();

    let result = manager.add(1, "Ankit", "a@x.com", "CS", 101.0);

    assert!(matches!(result, Err(RosterError::Validation(_))));
    assert!(manager.is_empty());
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_by_key() {
    let mut manager = manager_with(&[(1, "Ankit", 85.0), (2, "Riya", 91.0)]);

    let removed = manager.delete(1).unwrap();

    assert_eq!(removed.name(), "Ankit");
    assert_eq!(rolls(&manager), vec![2]);
    assert!(matches!(manager.search_by_key(1), Err(RosterError::NotFound(_))));
}

#[test]
fn test_delete_missing_key() {
    let mut manager = manager_with(&[(1, "Ankit", 85.0)]);

    let result = manager.delete(42);

    assert!(matches!(result, Err(RosterError::NotFound(_))));
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_delete_by_name_removes_all_matches() {
    let mut manager = manager_with(&[
        (1, "Ankit", 85.0),
        (2, "Riya", 91.0),
        (3, "ANKIT", 40.0),
        (4, "ankit", 60.0),
    ]);

    let removed = manager.delete_by_name("Ankit");

    assert_eq!(removed, 3);
    assert_eq!(rolls(&manager), vec![2]);
}

#[test]
fn test_delete_by_name_no_match() {
    let mut manager = manager_with(&[(1, "Ankit", 85.0)]);

    assert_eq!(manager.delete_by_name("Nobody"), 0);
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_delete_by_name_is_exact_not_substring() {
    let mut manager = manager_with(&[(1, "Ankit", 85.0), (2, "Ankita", 70.0)]);

    assert_eq!(manager.delete_by_name("ankit"), 1);
    assert_eq!(rolls(&manager), vec![2]);
}

#[test]
fn test_delete_keeps_lookup_consistent() {
    let mut manager = manager_with(&[(1, "A", 10.0), (2, "B", 20.0), (3, "C", 30.0)]);

    manager.delete(1).unwrap();

    assert_eq!(manager.search_by_key(2).unwrap().name(), "B");
    assert_eq!(manager.search_by_key(3).unwrap().name(), "C");
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_overwrites_fields_and_grade() {
    let mut manager = manager_with(&[(1, "Ankit", 85.0), (2, "Riya", 91.0)]);

    let updated = manager.update(1, "Ankit K", "ak@x.com", "IT", 55.0).unwrap();

    assert_eq!(updated.roll_number(), 1);
    assert_eq!(updated.name(), "Ankit K");
    assert_eq!(updated.email(), "ak@x.com");
    assert_eq!(updated.course(), "IT");
    assert_eq!(updated.marks(), 55.0);
    assert_eq!(updated.grade(), Grade::C);

    // Position in the roster is unchanged
    assert_eq!(rolls(&manager), vec![1, 2]);
}

#[test]
fn test_update_missing_key_leaves_roster_unchanged() {
    let mut manager = manager_with(&[(1, "Ankit", 85.0)]);
    let before = manager.roster().clone();

    let result = manager.update(9, "X", "x@x.com", "CS", 50.0);

    assert!(matches!(result, Err(RosterError::NotFound(_))));
    assert_eq!(manager.roster().as_slice(), before.as_slice());
}

#[test]
fn test_update_invalid_marks_is_a_no_op() {
    let mut manager = manager_with(&[(1, "Ankit", 85.0)]);

    let result = manager.update(1, "Changed", "c@x.com", "IT", -5.0);

    assert!(matches!(result, Err(RosterError::Validation(_))));
    let student = manager.search_by_key(1).unwrap();
    assert_eq!(student.name(), "Ankit");
    assert_eq!(student.course(), "CS");
    assert_eq!(student.marks(), 85.0);
    assert_eq!(student.grade(), Grade::A);
}

#[test]
fn test_update_empty_name_rejected() {
    let mut manager = manager_with(&[(1, "Ankit", 85.0)]);

    let result = manager.update(1, "", "a@x.com", "CS", 90.0);

    assert!(matches!(result, Err(RosterError::Validation(_))));
    assert_eq!(manager.search_by_key(1).unwrap().marks(), 85.0);
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_by_key_missing() {
    let manager = new_manager();

    match manager.search_by_key(7) {
        Err(RosterError::NotFound(msg)) => assert!(msg.contains('7')),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_search_by_name_case_insensitive_multiple() {
    let manager = manager_with(&[(1, "Riya", 91.0), (2, "Ankit", 85.0), (3, "riya", 40.0)]);

    let found: Vec<_> = manager
        .search_by_name("RIYA")
        .iter()
        .map(|s| s.roll_number())
        .collect();

    assert_eq!(found, vec![1, 3]);
}

#[test]
fn test_search_by_name_none() {
    let manager = manager_with(&[(1, "Riya", 91.0)]);
    assert!(manager.search_by_name("Ankit").is_empty());
}

// =============================================================================
// List / Sort Tests
// =============================================================================

#[test]
fn test_list_all_empty_signal() {
    let manager = new_manager();
    assert_eq!(manager.list_all(), Listing::Empty);
}

#[test]
fn test_sort_by_marks_descending_is_stable() {
    let mut manager = manager_with(&[(1, "A", 70.0), (2, "B", 95.0), (3, "C", 70.0), (4, "D", 60.0)]);

    let sorted: Vec<_> = manager
        .sort_by_marks_descending()
        .iter()
        .map(|s| (s.roll_number(), s.marks()))
        .collect();

    assert_eq!(sorted, vec![(2, 95.0), (1, 70.0), (3, 70.0), (4, 60.0)]);
}

#[test]
fn test_sort_is_standing_order() {
    let mut manager = manager_with(&[(1, "A", 50.0), (2, "B", 80.0)]);

    manager.sort_by_marks_descending();
    manager.add(3, "C", "c@x.com", "CS", 99.0).unwrap();

    // Sorted order kept, new record appended after it
    assert_eq!(rolls(&manager), vec![2, 1, 3]);
    assert_eq!(manager.search_by_key(1).unwrap().name(), "A");
}

#[test]
fn test_sort_empty_roster() {
    let mut manager = new_manager();
    assert!(manager.sort_by_marks_descending().is_empty());
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_open_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("students.txt");

    let manager = RosterManager::open_path(&path).unwrap();

    assert!(manager.is_empty());
    assert!(!path.exists());
}

#[test]
fn test_save_and_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp_dir.path().join("students.txt"))
        .build();

    let mut manager = RosterManager::open(config.clone()).unwrap();
    manager.add(1, "Ankit", "a@x.com", "CS", 85.0).unwrap();
    manager.add(2, "Riya", "r@x.com", "IT", 91.0).unwrap();
    manager.sort_by_marks_descending();
    manager.save().unwrap();

    let reopened = RosterManager::open(config).unwrap();

    assert_eq!(rolls(&reopened), vec![2, 1]);
    assert_eq!(reopened.search_by_key(2).unwrap().grade(), Grade::APlus);
    assert_eq!(reopened.search_by_key(1).unwrap().grade(), Grade::A);
}

#[test]
fn test_load_from_failure_keeps_current_roster() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("bad.txt");
    std::fs::write(&bad, "1,Ankit,a@x.com,CS,not-a-number\n").unwrap();

    let mut manager = manager_with(&[(5, "Keep", 75.0)]);

    let result = manager.load_from(&bad);

    assert!(matches!(result, Err(RosterError::Decode { line: 1, .. })));
    assert_eq!(rolls(&manager), vec![5]);
}

#[test]
fn test_load_from_replaces_roster() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("students.txt");
    std::fs::write(&path, "7,Riya,r@x.com,IT,91.0\n8,Ankit,a@x.com,CS,85.0\n").unwrap();

    let mut manager = manager_with(&[(5, "Old", 75.0)]);

    let loaded = manager.load_from(&path).unwrap();

    assert_eq!(loaded, 2);
    assert_eq!(rolls(&manager), vec![7, 8]);
}
