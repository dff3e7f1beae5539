//! Roster container
//!
//! Ordered vector of students plus a roll number → position index.

use std::collections::HashMap;

use crate::error::{Result, RosterError};
use crate::record::{RollNumber, Student};

/// Ordered, uniquely keyed collection of students
///
/// The vector is the single source of truth for order; the index is derived
/// from it and rebuilt after every operation that moves positions.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
    index: HashMap<RollNumber, usize>,
}

impl Roster {
    /// Create a new empty roster
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, roll_number: RollNumber) -> bool {
        self.index.contains_key(&roll_number)
    }

    pub fn get(&self, roll_number: RollNumber) -> Option<&Student> {
        self.index.get(&roll_number).map(|&pos| &self.students[pos])
    }

    /// Mutable access; `Student` has no roll number setter so the key is stable
    pub fn get_mut(&mut self, roll_number: RollNumber) -> Option<&mut Student> {
        let pos = *self.index.get(&roll_number)?;
        Some(&mut self.students[pos])
    }

    /// Append a student at the end of the current order
    pub fn insert(&mut self, student: Student) -> Result<&Student> {
        let roll_number = student.roll_number();
        if self.index.contains_key(&roll_number) {
            return Err(RosterError::DuplicateKey(roll_number));
        }

        let pos = self.students.len();
        self.students.push(student);
        self.index.insert(roll_number, pos);
        Ok(&self.students[pos])
    }

    /// Remove a student by key, keeping the relative order of the rest
    pub fn remove(&mut self, roll_number: RollNumber) -> Option<Student> {
        let pos = self.index.remove(&roll_number)?;
        let removed = self.students.remove(pos);
        self.reindex();
        Some(removed)
    }

    /// Keep only students matching the predicate; returns how many were removed
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&Student) -> bool,
    {
        let before = self.students.len();
        self.students.retain(keep);
        let removed = before - self.students.len();
        if removed > 0 {
            self.reindex();
        }
        removed
    }

    /// Stable sort, highest marks first
    pub fn sort_by_marks_descending(&mut self) {
        self.students.sort_by(|a, b| b.marks().total_cmp(&a.marks()));
        self.reindex();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn as_slice(&self) -> &[Student] {
        &self.students
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, student) in self.students.iter().enumerate() {
            self.index.insert(student.roll_number(), pos);
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
