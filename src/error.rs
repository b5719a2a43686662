//! Error types for par2-sets
//!
//! Filenames that do not follow the PAR2 naming grammar are not errors: they
//! degrade to an empty set name and no exponent range. Only filesystem
//! failures, unusable configuration, and a failed background task surface here.

use thiserror::Error;

/// Result type alias for par2-sets operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for par2-sets
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (missing or unreadable directory, unresolvable path)
    ///
    /// Passed through exactly as the operating system reported it.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "extension")
        key: Option<String>,
    },

    /// A background scan task panicked or was cancelled
    #[error("scan task failed: {0}")]
    TaskFailed(String),
}

impl Error {
    /// Returns the underlying I/O error, if this is a filesystem failure
    pub fn as_io(&self) -> Option<&std::io::Error> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
