//! Record Module
//!
//! The student entity and its derived grade.
//!
//! ## Responsibilities
//! - Hold one student's fields behind validating setters
//! - Derive the grade from marks, and re-derive it whenever marks change
//! - Reject values the flat-file format cannot represent
//!
//! ## Grade Policy
//! ```text
//! ┌──────────────┬───────┐
//! │ Marks        │ Grade │
//! ├──────────────┼───────┤
//! │ 90 ..= 100   │  A+   │
//! │ 80 ..  90    │  A    │
//! │ 70 ..  80    │  B+   │
//! │ 60 ..  70    │  B    │
//! │  0 ..  60    │  C    │
//! └──────────────┴───────┘
//! ```

mod grade;
mod student;

pub use grade::Grade;
pub use student::Student;

/// Unique key identifying a student
pub type RollNumber = u32;

/// Lowest accepted marks value (inclusive)
pub const MIN_MARKS: f64 = 0.0;

/// Highest accepted marks value (inclusive)
pub const MAX_MARKS: f64 = 100.0;

/// Field separator of the persisted line format
pub const FIELD_SEPARATOR: char = ',';
