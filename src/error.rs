//! Error types for evolog
//!
//! Unrecognized lines are never errors; a line that matched a known record
//! prefix but carries a malformed payload aborts the whole parse, since
//! downstream consumers assume a fully validated structure.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::RecordKind;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Evolog error types
#[derive(Error, Debug)]
pub enum Error {
    /// Input log file does not exist
    #[error("log file not found: {}", path.display())]
    NotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// A line matched a known record prefix but its payload failed
    /// token/numeric/literal parsing
    #[error("malformed {} record: {reason} (line: {line:?})", kind.label())]
    Format {
        /// Record kind the line was classified as
        kind: RecordKind,
        /// The offending raw line
        line: String,
        /// What went wrong with the payload
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a [`Error::Format`] for a payload that failed to parse.
    pub(crate) fn format(kind: RecordKind, line: &str, reason: impl ToString) -> Self {
        Self::Format {
            kind,
            line: line.to_string(),
            reason: reason.to_string(),
        }
    }
}
