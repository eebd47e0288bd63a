//! Error types for student-db
//!
//! Every variant carries enough context to be printed straight to the
//! operator as a one-line message.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// student-db error types
#[derive(Error, Debug)]
pub enum Error {
    /// A record with this id is already stored
    #[error("Student ID must be unique ({0} is already taken)")]
    DuplicateId(i64),

    /// No record with this id
    #[error("Student not found (no record with ID {0})")]
    NotFound(i64),

    /// Age input was not a plain non-negative integer
    #[error("Age must be a valid number, got '{0}'")]
    InvalidAge(String),

    /// Subject list was empty after trimming
    #[error("At least one subject is required")]
    EmptySubjects,

    /// Name was blank
    #[error("Name must not be empty")]
    EmptyName,

    /// Id input was not an integer
    #[error("Please enter a valid numeric ID, got '{0}'")]
    InvalidId(String),

    /// Unknown main-menu entry
    #[error("Invalid choice '{0}'")]
    InvalidMenuChoice(String),

    /// Unknown update-menu entry
    #[error("Invalid field choice '{0}'")]
    InvalidField(String),

    /// Data file exists but is not a valid record array
    #[error("Malformed data file {}: {message}", .path.display())]
    Codec {
        /// File that failed to parse
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },

    /// Logger could not be installed
    #[error("Logger error: {0}")]
    Logger(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
