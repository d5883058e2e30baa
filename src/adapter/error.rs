//! Error types for CSV conversion.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Structural failures while converting a spreadsheet.
///
/// Field-level data-quality issues are never errors - they are accumulated
/// into the QA summary. Only unreadable input and malformed CSV structure
/// (e.g. a row with a different field count than the header) abort the
/// conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file could not be opened.
    #[error(
        "cannot read CSV file '{path}': {source}\n  Suggestion: check that the path exists and is readable"
    )]
    Read {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The CSV structure is malformed (ragged rows, bad quoting, non-UTF-8).
    #[error(
        "malformed CSV structure: {source}\n  Suggestion: every row must have the same number of fields as the header"
    )]
    Csv {
        /// Underlying CSV error
        #[from]
        source: csv::Error,
    },
}

impl ConvertError {
    /// Creates a `Read` error for a failed file open.
    #[must_use]
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}
