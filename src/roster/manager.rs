//! Roster Manager
//!
//! Owns the roster and implements every caller-facing operation.

use std::path::Path;

use crate::command::{Command, Outcome};
use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::record::{RollNumber, Student};
use crate::storage;

use super::Roster;

/// Result of listing the roster
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Listing<'a> {
    /// The roster holds no records
    Empty,

    /// Every record, in canonical order
    Students(&'a [Student]),
}

/// Owns one roster and enforces its invariants
///
/// Every failed operation leaves the roster exactly as it was.
#[derive(Debug)]
pub struct RosterManager {
    /// Manager configuration
    config: Config,

    /// The canonical, ordered collection
    roster: Roster,
}

impl RosterManager {
    /// Create a manager with an empty roster (nothing is read from disk)
    pub fn new(config: Config) -> Self {
        Self {
            config,
            roster: Roster::new(),
        }
    }

    /// Open a manager, loading `config.data_file` if it exists
    pub fn open(config: Config) -> Result<Self> {
        let roster = storage::load_roster(&config.data_file)?;
        Ok(Self { config, roster })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data file
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_file(path).build())
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add {
                roll_number,
                name,
                email,
                course,
                marks,
            } => self
                .add(roll_number, name, email, course, marks)
                .map(|s| Outcome::Student(s.clone())),
            Command::Delete { roll_number } => self.delete(roll_number).map(Outcome::Student),
            Command::DeleteByName { name } => Ok(Outcome::Removed(self.delete_by_name(&name))),
            Command::Update {
                roll_number,
                name,
                email,
                course,
                marks,
            } => self
                .update(roll_number, name, email, course, marks)
                .map(|s| Outcome::Student(s.clone())),
            Command::Get { roll_number } => self
                .search_by_key(roll_number)
                .map(|s| Outcome::Student(s.clone())),
            Command::Search { name } => Ok(Outcome::Students(
                self.search_by_name(&name).into_iter().cloned().collect(),
            )),
            Command::List => Ok(match self.list_all() {
                Listing::Empty => Outcome::Empty,
                Listing::Students(students) => Outcome::Students(students.to_vec()),
            }),
            Command::Sort => Ok(Outcome::Students(self.sort_by_marks_descending().to_vec())),
        }
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Add a new student at the end of the roster
    pub fn add(
        &mut self,
        roll_number: RollNumber,
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
        marks: f64,
    ) -> Result<&Student> {
        if self.roster.contains(roll_number) {
            return Err(RosterError::DuplicateKey(roll_number));
        }

        let student = Student::new(roll_number, name, email, course, marks)?;
        tracing::debug!(roll_number, grade = %student.grade(), "Adding student");
        self.roster.insert(student)
    }

    /// Remove a student by roll number, returning the removed record
    pub fn delete(&mut self, roll_number: RollNumber) -> Result<Student> {
        let removed = self
            .roster
            .remove(roll_number)
            .ok_or_else(|| RosterError::roll_not_found(roll_number))?;
        tracing::debug!(roll_number, "Deleted student");
        Ok(removed)
    }

    /// Remove every student whose name matches (case-insensitive)
    ///
    /// Returns the number of records removed; zero is not an error.
    pub fn delete_by_name(&mut self, name: &str) -> usize {
        let removed = self.roster.retain(|s| !s.name_matches(name));
        if removed == 0 {
            tracing::warn!("No student named '{}' to delete", name);
        } else {
            tracing::debug!(removed, "Deleted students named '{}'", name);
        }
        removed
    }

    /// Overwrite name, email, course and marks of an existing student
    ///
    /// All values are validated before anything is written.
    pub fn update(
        &mut self,
        roll_number: RollNumber,
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
        marks: f64,
    ) -> Result<&Student> {
        if !self.roster.contains(roll_number) {
            return Err(RosterError::roll_not_found(roll_number));
        }

        let replacement = Student::new(roll_number, name, email, course, marks)?;
        let slot = self
            .roster
            .get_mut(roll_number)
            .ok_or_else(|| RosterError::roll_not_found(roll_number))?;
        *slot = replacement;

        tracing::debug!(roll_number, grade = %slot.grade(), "Updated student");
        Ok(slot)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Look up a student by roll number
    pub fn search_by_key(&self, roll_number: RollNumber) -> Result<&Student> {
        self.roster
            .get(roll_number)
            .ok_or_else(|| RosterError::roll_not_found(roll_number))
    }

    /// All students whose name matches (case-insensitive, exact), in roster order
    pub fn search_by_name(&self, name: &str) -> Vec<&Student> {
        self.roster.iter().filter(|s| s.name_matches(name)).collect()
    }

    /// Every student in canonical order
    pub fn list_all(&self) -> Listing<'_> {
        if self.roster.is_empty() {
            Listing::Empty
        } else {
            Listing::Students(self.roster.as_slice())
        }
    }

    /// Reorder the roster by marks, highest first
    ///
    /// The sort is stable and the new order is kept for later listings and
    /// saves.
    pub fn sort_by_marks_descending(&mut self) -> &[Student] {
        self.roster.sort_by_marks_descending();
        tracing::debug!(records = self.roster.len(), "Sorted roster by marks");
        self.roster.as_slice()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Replace the roster with the contents of `path`
    ///
    /// On error the current roster is kept. Returns the number of records
    /// loaded.
    pub fn load_from(&mut self, path: &Path) -> Result<usize> {
        self.roster = storage::load_roster(path)?;
        Ok(self.roster.len())
    }

    /// Write the full roster to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::save_roster(path, &self.roster)
    }

    /// Write the full roster to the configured data file
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.config.data_file)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Read-only view of the underlying roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
