//! CSV timecourse reader.

use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::timecourse::Timecourse;
use crate::validate::ValidationCollector;

/// Cell contents, compared case-insensitively, that mark a missing value.
const MISSING_TOKENS: [&str; 2] = ["na", "nan"];

// ---------------------------------------------------------------------------
// CsvConfig
// ---------------------------------------------------------------------------

/// Configuration for reading a timecourse from a delimited text file.
///
/// The [`Default`] expects a comma-separated file with `time` and `value`
/// header columns. Extra columns are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvConfig {
    /// Header of the time column.
    time_column: String,
    /// Header of the value column.
    value_column: String,
    /// Field delimiter byte.
    delimiter: u8,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            time_column: "time".into(),
            value_column: "value".into(),
            delimiter: b',',
        }
    }
}

impl CsvConfig {
    /// Set the time column header.
    pub fn with_time_column(mut self, name: impl Into<String>) -> Self {
        self.time_column = name.into();
        self
    }

    /// Set the value column header.
    pub fn with_value_column(mut self, name: impl Into<String>) -> Self {
        self.value_column = name.into();
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Time column header.
    pub fn time_column(&self) -> &str {
        &self.time_column
    }

    /// Value column header.
    pub fn value_column(&self) -> &str {
        &self.value_column
    }

    /// Field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every problem: empty column
    /// names, identical time and value columns, or a delimiter that is not
    /// a printable ASCII separator.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        c.check(
            self.time_column.trim().is_empty(),
            "time_column must not be empty",
        );
        c.check(
            self.value_column.trim().is_empty(),
            "value_column must not be empty",
        );
        c.check(
            !self.time_column.is_empty() && self.time_column == self.value_column,
            format!(
                "time_column and value_column are both '{}'",
                self.time_column
            ),
        );
        let d = self.delimiter;
        c.check(
            !d.is_ascii() || d == b'"' || d == b'\n' || d == b'\r' || d.is_ascii_alphanumeric(),
            format!("delimiter {:?} is not a usable separator", d as char),
        );
        c.finish()
    }
}

// ---------------------------------------------------------------------------
// read_csv
// ---------------------------------------------------------------------------

/// Read a timecourse from a delimited text file with a header row.
///
/// Blank cells and the tokens `NA` / `NaN` (any case) in the value column
/// are read as missing (NaN). Every time cell must parse as a number. The
/// label is the file stem.
///
/// # Errors
///
/// - [`IoError::Validation`] if `config` is invalid (checked before I/O).
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::MissingColumn`] if a configured column is absent.
/// - [`IoError::Parse`] for an unparsable cell.
/// - [`IoError::EmptyData`] if there are no data rows.
/// - [`IoError::Csv`] for malformed CSV such as ragged rows.
#[tracing::instrument(skip(path, config), fields(path = %path.display()))]
pub fn read_csv(path: &Path, config: &CsvConfig) -> Result<Timecourse, IoError> {
    config.validate()?;

    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let column = |name: &str| -> Result<usize, IoError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IoError::MissingColumn {
                name: name.to_string(),
                path: path.to_path_buf(),
            })
    };
    let time_idx = column(&config.time_column)?;
    let value_idx = column(&config.value_column)?;
    debug!(time_idx, value_idx, "resolved columns");

    let mut time = Vec::new();
    let mut values = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // Header occupies line 1.
        let line = record.position().map_or(row as u64 + 2, |p| p.line());
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        time.push(parse_time(cell(time_idx), line, &config.time_column)?);
        values.push(parse_value(cell(value_idx), line, &config.value_column)?);
    }

    if time.is_empty() {
        return Err(IoError::EmptyData {
            path: path.to_path_buf(),
        });
    }

    let label = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let timecourse = Timecourse::new(label, time, values)?;

    info!(
        label = timecourse.label(),
        n_points = timecourse.len(),
        n_missing = timecourse.n_missing(),
        "timecourse loaded"
    );
    Ok(timecourse)
}

/// True for blank cells and missing-value tokens.
fn is_missing(cell: &str) -> bool {
    cell.is_empty() || MISSING_TOKENS.iter().any(|t| cell.eq_ignore_ascii_case(t))
}

fn parse_time(cell: &str, line: u64, column: &str) -> Result<f64, IoError> {
    if is_missing(cell) {
        return Err(IoError::Parse {
            line,
            column: column.to_string(),
            reason: "time point is missing".to_string(),
        });
    }
    parse_number(cell, line, column)
}

fn parse_value(cell: &str, line: u64, column: &str) -> Result<f64, IoError> {
    if is_missing(cell) {
        return Ok(f64::NAN);
    }
    parse_number(cell, line, column)
}

fn parse_number(cell: &str, line: u64, column: &str) -> Result<f64, IoError> {
    cell.parse::<f64>().map_err(|e| IoError::Parse {
        line,
        column: column.to_string(),
        reason: format!("cannot parse '{cell}': {e}"),
    })
}
