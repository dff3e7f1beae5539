//! Outcome definitions
//!
//! Represents successful results handed back to callers. Failures travel as
//! `RosterError`.

use crate::record::Student;

/// Result of an executed command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A single record
    Student(Student),

    /// Zero or more records, in roster order
    Students(Vec<Student>),

    /// Number of records removed
    Removed(usize),

    /// The roster holds no records
    Empty,
}

impl Outcome {
    /// Records carried by this outcome, if any
    pub fn students(&self) -> &[Student] {
        match self {
            Outcome::Student(student) => std::slice::from_ref(student),
            Outcome::Students(students) => students,
            Outcome::Removed(_) | Outcome::Empty => &[],
        }
    }
}
