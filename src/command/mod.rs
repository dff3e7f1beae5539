//! Command Module
//!
//! Requests a caller can route through `RosterManager::execute`, and the
//! outcomes they produce.
//!
//! ## Commands
//! - ADD          - insert a new student (fails on duplicate roll number)
//! - DELETE       - remove one student by roll number
//! - DELETE_NAME  - remove every student whose name matches
//! - UPDATE       - overwrite name/email/course/marks of one student
//! - GET          - look up one student by roll number
//! - SEARCH       - look up students by name
//! - LIST         - every student in canonical order
//! - SORT         - reorder by marks, highest first
//!
//! ## Outcomes
//! - STUDENT      - a single record (ADD, UPDATE, GET, DELETE)
//! - STUDENTS     - zero or more records in order (SEARCH, LIST, SORT)
//! - REMOVED      - number of records removed (DELETE_NAME)
//! - EMPTY        - the roster holds no records (LIST)

mod request;
mod outcome;

pub use request::{Command, CommandType};
pub use outcome::Outcome;
