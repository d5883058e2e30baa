//! Error types for catalog store operations.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading catalog files.
///
/// Structural failures are fatal: the store returns no partial collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read from disk.
    #[error(
        "cannot read catalog file '{path}': {source}\n  Suggestion: check that the path exists and is readable"
    )]
    Read {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file was readable but did not contain the expected JSON shape.
    #[error(
        "invalid JSON in catalog file '{path}': {source}\n  Suggestion: the file must contain a JSON array of {expected}"
    )]
    Parse {
        /// Path of the malformed file
        path: PathBuf,
        /// What the array should have contained
        expected: &'static str,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Creates a `Read` error for a failed file open.
    #[must_use]
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Creates a `Parse` error for malformed file content.
    #[must_use]
    pub fn parse(path: &Path, expected: &'static str, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            expected,
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_message_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = StoreError::read(Path::new("/tmp/teas.json"), io);
        let msg = err.to_string();
        assert!(msg.contains("/tmp/teas.json"), "should contain path");
        assert!(msg.contains("Suggestion"), "should carry a suggestion");
    }

    #[test]
    fn test_parse_error_message_names_expected_shape() {
        let json_err = serde_json::from_str::<Vec<i32>>("{").unwrap_err();
        let err = StoreError::parse(Path::new("colors.json"), "color entries", json_err);
        let msg = err.to_string();
        assert!(msg.contains("colors.json"));
        assert!(msg.contains("color entries"));
    }
}
