//! Error types for advdashlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building the dashboard data set.
///
/// Malformed CSV lines are *not* errors: the parser recovers from them and
/// reports them as [`crate::parser::ParseWarning`]s. The only fatal failure
/// class is being unable to read the source file at all.
#[derive(Error, Debug)]
pub enum AdvdashError {
    /// Failed to read the source CSV file
    #[error("failed to read source file '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Page size must be at least 1
    #[error("invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
