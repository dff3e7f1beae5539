//! Student record
//!
//! Fields are private so the grade can never drift from the marks it was
//! derived from.

use crate::error::{Result, RosterError};

use super::{Grade, RollNumber, FIELD_SEPARATOR, MAX_MARKS, MIN_MARKS};

/// A single student record
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    roll_number: RollNumber,
    name: String,
    email: String,
    course: String,
    marks: f64,
    grade: Grade,
}

impl Student {
    /// Create a validated student; the grade is derived immediately
    pub fn new(
        roll_number: RollNumber,
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
        marks: f64,
    ) -> Result<Self> {
        let name = name.into();
        let email = email.into();
        let course = course.into();

        validate_required("name", &name)?;
        validate_text("email", &email)?;
        validate_required("course", &course)?;
        validate_marks(marks)?;

        Ok(Self {
            roll_number,
            name,
            email,
            course,
            marks,
            grade: Grade::from_marks(marks),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn roll_number(&self) -> RollNumber {
        self.roll_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn marks(&self) -> f64 {
        self.marks
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Case-insensitive exact comparison against the student's name
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_required("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<()> {
        let email = email.into();
        validate_text("email", &email)?;
        self.email = email;
        Ok(())
    }

    pub fn set_course(&mut self, course: impl Into<String>) -> Result<()> {
        let course = course.into();
        validate_required("course", &course)?;
        self.course = course;
        Ok(())
    }

    /// Set marks and re-derive the grade
    pub fn set_marks(&mut self, marks: f64) -> Result<()> {
        validate_marks(marks)?;
        self.marks = marks;
        self.grade = Grade::from_marks(marks);
        Ok(())
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Marks must be finite and within [MIN_MARKS, MAX_MARKS]
pub(crate) fn validate_marks(marks: f64) -> Result<()> {
    if !marks.is_finite() || !(MIN_MARKS..=MAX_MARKS).contains(&marks) {
        return Err(RosterError::Validation(format!(
            "marks must be between {} and {}, got {}",
            MIN_MARKS, MAX_MARKS, marks
        )));
    }
    Ok(())
}

fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::Validation(format!("{} cannot be empty", field)));
    }
    validate_text(field, value)
}

/// The line format has no escaping, so separators and line breaks are refused
fn validate_text(field: &str, value: &str) -> Result<()> {
    if value.contains(FIELD_SEPARATOR) || value.contains('\n') || value.contains('\r') {
        return Err(RosterError::Validation(format!(
            "{} cannot contain '{}' or line breaks",
            field, FIELD_SEPARATOR
        )));
    }
    Ok(())
}
