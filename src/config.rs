//! Runtime configuration
//!
//! There are no flags or config files; the binary runs with
//! [`Config::default`]. Tests and embedders point it at another data file
//! with [`Config::data_path`]; the log level is overridden through `RUST_LOG`.

use std::path::{Path, PathBuf};

/// Data file the interactive tool reads at startup and writes on exit
pub const DEFAULT_DATA_FILE: &str = "students.txt";

/// Log level used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Resolved settings for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    data_path: PathBuf,
    log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Set the data file path.
    #[must_use]
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Path of the JSON data file.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.data_path
    }

    /// Fallback log level string.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.log_level
    }
}
