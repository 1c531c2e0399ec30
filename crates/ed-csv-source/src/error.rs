//! Error types for the CSV source.

use thiserror::Error;

/// Errors that can occur while reading and cleaning a visit file.
#[derive(Error, Debug)]
pub enum CsvSourceError {
    /// IO error opening the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV, including rows with the wrong number of columns.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header does not list the bronze columns in order.
    #[error("Header mismatch: expected [{}], found [{}]", .expected.join(", "), .found.join(", "))]
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A field could not be coerced to its declared type.
    #[error("Row {row}: cannot coerce {column} value '{value}': {reason}")]
    Coercion {
        /// 1-based data row (header excluded)
        row: u64,
        column: &'static str,
        value: String,
        reason: String,
    },
}
