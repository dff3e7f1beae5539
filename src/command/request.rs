//! Command definitions
//!
//! Represents requests from callers.

use crate::record::RollNumber;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Add,
    Delete,
    DeleteByName,
    Update,
    Get,
    Search,
    List,
    Sort,
}

impl CommandType {
    /// Whether the command changes the roster (content or order)
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            CommandType::Add
                | CommandType::Delete
                | CommandType::DeleteByName
                | CommandType::Update
                | CommandType::Sort
        )
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a new student
    Add {
        roll_number: RollNumber,
        name: String,
        email: String,
        course: String,
        marks: f64,
    },

    /// Delete a student by roll number
    Delete { roll_number: RollNumber },

    /// Delete every student with a matching name
    DeleteByName { name: String },

    /// Overwrite the mutable fields of a student
    Update {
        roll_number: RollNumber,
        name: String,
        email: String,
        course: String,
        marks: f64,
    },

    /// Get a student by roll number
    Get { roll_number: RollNumber },

    /// Search students by name
    Search { name: String },

    /// List all students
    List,

    /// Sort by marks, highest first
    Sort,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Add { .. } => CommandType::Add,
            Command::Delete { .. } => CommandType::Delete,
            Command::DeleteByName { .. } => CommandType::DeleteByName,
            Command::Update { .. } => CommandType::Update,
            Command::Get { .. } => CommandType::Get,
            Command::Search { .. } => CommandType::Search,
            Command::List => CommandType::List,
            Command::Sort => CommandType::Sort,
        }
    }

    pub fn is_mutation(&self) -> bool {
        self.command_type().is_mutation()
    }
}
