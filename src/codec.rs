//! JSON file codec
//!
//! The data file is a JSON array of record objects:
//!
//! ```text
//! [
//!     {"id": 101, "name": "Aarav Singh", "age": 18, "grade": "A", "subjects": ["Math", "Physics"]},
//!     ...
//! ]
//! ```
//!
//! Reads and writes are whole-file. A missing file is an empty store, not an
//! error; a file that exists but does not parse is reported to the caller.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{info, warn};

use crate::record::StudentRecord;
use crate::store::RecordStore;
use crate::{Error, Result};

/// Indent used for the pretty-printed data file
const INDENT: &[u8] = b"    ";

/// Write every record in `store` to `path`, replacing the file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn save<P: AsRef<Path>>(store: &RecordStore, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    store
        .list()
        .serialize(&mut ser)
        .map_err(|e| Error::Io(e.into()))?;

    fs::write(path, buf)?;
    info!(path = %path.display(), records = store.len(), "data saved");
    Ok(())
}

/// Read all records from `path`.
///
/// Returns an empty vector if the file does not exist.
///
/// # Errors
///
/// Returns [`Error::Codec`] if the file is not a valid record array, or
/// [`Error::Io`] if it exists but cannot be read.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<StudentRecord>> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no existing data found");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let records: Vec<StudentRecord> = serde_json::from_str(&text).map_err(|e| {
        warn!(path = %path.display(), error = %e, "data file is malformed");
        Error::Codec {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    info!(path = %path.display(), records = records.len(), "data loaded");
    Ok(records)
}

/// Where a startup store came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Records read from the data file
    File,
    /// Nothing on disk; the seed set was installed
    Seed,
}

/// Load `path` into a store, falling back to `seed` when nothing was loaded.
///
/// Both a missing file and an empty array count as "nothing loaded".
///
/// # Errors
///
/// Propagates every error from [`load`]; a malformed file is never
/// replaced by the seed set.
pub fn load_or_seed<P, F>(path: P, seed: F) -> Result<(RecordStore, Origin)>
where
    P: AsRef<Path>,
    F: FnOnce() -> Vec<StudentRecord>,
{
    let records = load(path)?;
    if records.is_empty() {
        let seeded = seed();
        info!(records = seeded.len(), "starting from seed set");
        return Ok((RecordStore::from_records(seeded), Origin::Seed));
    }
    Ok((RecordStore::from_records(records), Origin::File))
}
