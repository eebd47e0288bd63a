//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup. Output goes to stderr so log lines never
//! land in the middle of a prompt on stdout.

use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; `level` (`"error"`, `"warn"`, `"info"`,
/// `"debug"`, `"trace"`) is the fallback.
///
/// # Errors
///
/// Returns [`Error::Logger`] if the level is invalid or a subscriber is
/// already installed.
pub fn init(level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::Logger(format!("failed to set subscriber: {e}")))
}

/// `RUST_LOG` if it parses, otherwise `level`.
fn filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| Error::Logger(format!("invalid log level '{level}': {e}")))
}
