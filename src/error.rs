//! Error types for the ambient surfaces of the stopwatch.
//!
//! The clock itself cannot fail; only configuration and logger setup can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring the stopwatch or its logger.
#[derive(Debug, Error)]
pub enum Error {
    /// The tick interval must be at least one millisecond.
    #[error("tick interval must be at least 1ms, got {0:?}")]
    InvalidInterval(std::time::Duration),

    /// The log file could not be opened for writing.
    #[error("failed to open log file {path}")]
    LogFile {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
