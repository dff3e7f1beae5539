//! File persistence
//!
//! Loads and saves the whole roster to a single flat file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::roster::Roster;

use super::codec::{read_roster, write_roster};

/// Load a roster from `path`
///
/// A missing file is a first run and yields an empty roster.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!("No previous data found at {}, starting fresh", path.display());
            return Ok(Roster::new());
        }
        Err(e) => return Err(e.into()),
    };

    let roster = read_roster(BufReader::new(file))?;
    tracing::info!("Loaded {} records from {}", roster.len(), path.display());
    Ok(roster)
}

/// Save the full roster to `path`
///
/// Writes `<path>.tmp`, syncs it, then renames over `path` so readers see
/// either the old file or the new one.
pub fn save_roster(path: &Path, roster: &Roster) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = tmp_path(path);
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&tmp_path)?;

    let mut writer = BufWriter::new(file);
    write_roster(&mut writer, roster)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    fs::rename(&tmp_path, path)?;

    tracing::info!("Saved {} records to {}", roster.len(), path.display());
    Ok(())
}

/// "students.txt" → "students.txt.tmp"
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
