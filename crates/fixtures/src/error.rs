//! Error types for fixture loading and parsing.

use thiserror::Error;

/// Errors that can occur while loading a catalog fixture file.
///
/// Each variant carries enough context (file, line number, offending value)
/// to point at the exact spot in the fixture that needs fixing.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// I/O error occurred while reading the fixture file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Line in the fixture couldn't be parsed
    #[error("Parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// A field had a value that isn't a valid non-negative integer
    #[error("Invalid value for {field} at line {line}: {value}")]
    InvalidValue {
        field: String,
        value: String,
        line: usize,
    },

    /// The parsed fields were rejected by record construction
    #[error(transparent)]
    InvalidRecord(#[from] catalog::CatalogError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FixtureError>;
