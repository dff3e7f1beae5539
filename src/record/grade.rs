//! Grade derivation

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RosterError};

/// Letter grade derived from marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    APlus,
    A,
    BPlus,
    B,
    C,
}

impl Grade {
    /// Derive the grade for a marks value
    pub fn from_marks(marks: f64) -> Self {
        if marks >= 90.0 {
            Grade::APlus
        } else if marks >= 80.0 {
            Grade::A
        } else if marks >= 70.0 {
            Grade::BPlus
        } else if marks >= 60.0 {
            Grade::B
        } else {
            Grade::C
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "A+" => Ok(Grade::APlus),
            "A" => Ok(Grade::A),
            "B+" => Ok(Grade::BPlus),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            other => Err(RosterError::Validation(format!("unknown grade '{}'", other))),
        }
    }
}
