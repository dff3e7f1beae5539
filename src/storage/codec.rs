//! Line codec
//!
//! Encoding and decoding functions for the persisted line format.
//!
//! ### Line Format
//! ```text
//! ┌──────────┬──────┬───────┬────────┬───────┐
//! │ roll (u) │ name │ email │ course │ marks │
//! └──────────┴──────┴───────┴────────┴───────┘
//!        joined by ',' - e.g. "7,Riya,r@x.com,IT,91.0"
//! ```

use std::io::{BufRead, Write};

use crate::error::{Result, RosterError};
use crate::record::{RollNumber, Student, FIELD_SEPARATOR};
use crate::roster::Roster;

/// Number of fields on every record line
pub const FIELD_COUNT: usize = 5;

// =============================================================================
// Encoding
// =============================================================================

/// Encode one student as a line (without line terminator)
pub fn encode_student(student: &Student) -> String {
    format!(
        "{roll}{sep}{name}{sep}{email}{sep}{course}{sep}{marks}",
        roll = student.roll_number(),
        name = student.name(),
        email = student.email(),
        course = student.course(),
        marks = format_marks(student.marks()),
        sep = FIELD_SEPARATOR,
    )
}

/// Encode a roster, one line per student in roster order
pub fn encode(roster: &Roster) -> Vec<String> {
    roster.iter().map(encode_student).collect()
}

/// Shortest round-tripping form, always with a fractional part ("85.0")
fn format_marks(marks: f64) -> String {
    if marks.fract() == 0.0 {
        format!("{:.1}", marks)
    } else {
        marks.to_string()
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a single line
///
/// `line_no` is 1-based and only used for error reporting.
pub fn decode_line(line: &str, line_no: usize) -> Result<Student> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    if fields.len() != FIELD_COUNT {
        return Err(decode_error(
            line_no,
            format!("expected {} fields, got {}", FIELD_COUNT, fields.len()),
        ));
    }

    let roll_number: RollNumber = fields[0].trim().parse().map_err(|e| {
        decode_error(line_no, format!("invalid roll number '{}': {}", fields[0], e))
    })?;

    let marks: f64 = fields[4]
        .trim()
        .parse()
        .map_err(|e| decode_error(line_no, format!("invalid marks '{}': {}", fields[4], e)))?;

    Student::new(roll_number, fields[1], fields[2], fields[3], marks).map_err(|e| match e {
        RosterError::Validation(reason) => decode_error(line_no, reason),
        other => other,
    })
}

/// Decode a sequence of lines into a roster
///
/// Blank lines are skipped. Line numbers in errors count every line,
/// blank ones included.
pub fn decode<I, S>(lines: I) -> Result<Roster>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut roster = Roster::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        let line_no = idx + 1;
        let student = decode_line(line, line_no)?;
        if let Err(RosterError::DuplicateKey(roll)) = roster.insert(student) {
            return Err(decode_error(line_no, format!("duplicate roll number {}", roll)));
        }
    }

    Ok(roster)
}

fn decode_error(line: usize, reason: impl Into<String>) -> RosterError {
    RosterError::Decode {
        line,
        reason: reason.into(),
    }
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read and decode every line from a buffered reader
pub fn read_roster<R: BufRead>(reader: R) -> Result<Roster> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    decode(lines)
}

/// Write every student as a newline-terminated line
pub fn write_roster<W: Write>(writer: &mut W, roster: &Roster) -> Result<()> {
    for line in encode(roster) {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
