//! Error types for timecourse-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the timecourse-io crate.
///
/// Covers missing files, CSV syntax failures, absent columns, unparsable
/// cells, and invalid reader configuration.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV reader.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a required column is not present in the header.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a cell cannot be parsed as a number.
    #[error("line {line}, column '{column}': {reason}")]
    Parse {
        /// 1-based line number in the file.
        line: u64,
        /// Column name.
        column: String,
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when a file has a header but no data rows.
    #[error("no data rows in {}", path.display())]
    EmptyData {
        /// Path to the empty file.
        path: PathBuf,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_csv() {
        let err = IoError::Csv {
            reason: "unequal lengths".to_string(),
        };
        assert_eq!(err.to_string(), "csv error: unequal lengths");
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "a; b".to_string(),
        };
        assert_eq!(err.to_string(), "2 validation error(s): a; b");
    }

    #[test]
    fn display_missing_column() {
        let err = IoError::MissingColumn {
            name: "value".to_string(),
            path: PathBuf::from("akt.csv"),
        };
        assert_eq!(err.to_string(), "column 'value' not found in akt.csv");
    }

    #[test]
    fn display_parse() {
        let err = IoError::Parse {
            line: 4,
            column: "time".to_string(),
            reason: "invalid float literal".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 4, column 'time': invalid float literal"
        );
    }

    #[test]
    fn display_empty() {
        let err = IoError::EmptyData {
            path: PathBuf::from("empty.csv"),
        };
        assert_eq!(err.to_string(), "no data rows in empty.csv");
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<IoError>();
    }
}
