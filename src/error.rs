//! Error types for Roster
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::record::RollNumber;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for Roster operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Roll number {0} already exists")]
    DuplicateKey(RollNumber),

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("Malformed record on line {line}: {reason}")]
    Decode { line: usize, reason: String },
}

impl RosterError {
    /// Not-found error for a roll number lookup
    pub fn roll_not_found(roll_number: RollNumber) -> Self {
        RosterError::NotFound(format!("no record with roll number {}", roll_number))
    }
}
