//! Storage Module
//!
//! Flat-file persistence for the roster.
//!
//! ## Responsibilities
//! - Encode the roster as one text line per student
//! - Decode lines back into a roster, re-deriving grades
//! - Load from a file (missing file = empty roster)
//! - Rewrite the whole file on save (temp file + rename)
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ rollNumber,name,email,course,marks                   │
//! │ rollNumber,name,email,course,marks                   │
//! │ ... (one line per student, no header)                │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! - UTF-8, fields separated by `,` with no escaping
//! - blank lines are ignored on read, trailing newline optional
//! - grades are never stored; they are derived from marks on decode

mod codec;
mod file;

pub use codec::{decode, decode_line, encode, encode_student, read_roster, write_roster, FIELD_COUNT};
pub use file::{load_roster, save_roster};
