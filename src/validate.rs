//! Field validation for operator input
//!
//! Pure functions that turn raw prompt text into typed field values. Input
//! is trimmed of surrounding whitespace before it is checked.

use crate::store::RecordStore;
use crate::{Error, Result};

/// Parse an age: one or more ASCII digits, nothing else.
///
/// Signs are rejected, so `"-5"` and `"+5"` both fail.
///
/// # Errors
///
/// Returns [`Error::InvalidAge`] for empty, signed, non-numeric or
/// out-of-range input.
///
/// # Example
///
/// ```rust
/// use student_db::validate::validate_age;
///
/// assert_eq!(validate_age("20").unwrap(), 20);
/// assert!(validate_age("-5").is_err());
/// ```
pub fn validate_age(text: &str) -> Result<u32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidAge(text.to_string()));
    }
    text.parse()
        .map_err(|_| Error::InvalidAge(text.to_string()))
}

/// Split a comma-separated subject list, dropping blank entries.
///
/// # Errors
///
/// Returns [`Error::EmptySubjects`] when no subject remains.
///
/// # Example
///
/// ```rust
/// use student_db::validate::validate_subjects;
///
/// assert_eq!(
///     validate_subjects("Math, , Science,").unwrap(),
///     vec!["Math".to_string(), "Science".to_string()]
/// );
/// ```
pub fn validate_subjects(text: &str) -> Result<Vec<String>> {
    let subjects: Vec<String> = text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if subjects.is_empty() {
        return Err(Error::EmptySubjects);
    }
    Ok(subjects)
}

/// Parse a record id. Signed integers are accepted.
///
/// # Errors
///
/// Returns [`Error::InvalidId`] if the text is not an integer.
pub fn validate_id(text: &str) -> Result<i64> {
    let text = text.trim();
    text.parse()
        .map_err(|_| Error::InvalidId(text.to_string()))
}

/// Trim a name and require it to be non-empty.
///
/// # Errors
///
/// Returns [`Error::EmptyName`] for blank input.
pub fn validate_name(text: &str) -> Result<String> {
    let name = text.trim();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(name.to_string())
}

/// True if no record in `store` uses `id`.
#[must_use]
pub fn validate_id_unique(store: &RecordStore, id: i64) -> bool {
    !store.contains(id)
}
