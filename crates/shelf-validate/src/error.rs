//! Error types for row validation.

use thiserror::Error;

/// A validation failure, naming the offending column and rule category.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Validation was attempted with no column rules configured.
    #[error("no column rules configured")]
    NoColumns,

    /// The number of values does not match the number of column rules.
    #[error("expected {expected} values, got {actual}")]
    ShapeMismatch {
        /// Configured rule count.
        expected: usize,
        /// Submitted value count.
        actual: usize,
    },

    /// A value is the empty string.
    #[error("column {column} must not be empty")]
    Empty {
        /// The column whose value was empty.
        column: String,
    },

    /// A text value contains a literal single quote.
    #[error("column {column} must not contain a single quote")]
    QuoteRejected {
        /// The column whose value embedded a quote.
        column: String,
    },

    /// A value exceeds the column's maximum length.
    #[error("column {column} must be at most {limit} characters")]
    TooLong {
        /// The over-long column.
        column: String,
        /// The configured maximum.
        limit: usize,
    },

    /// A fixed-width value has the wrong length.
    #[error("column {column} must be exactly {limit} characters")]
    WrongLength {
        /// The fixed-width column.
        column: String,
        /// The required length.
        limit: usize,
    },

    /// A value flagged as an email address does not parse as one.
    #[error("column {column} is not a valid email address")]
    BadEmail {
        /// The email column.
        column: String,
    },

    /// An integer column's value does not parse as a number.
    #[error("column {column} is not numeric")]
    NotNumeric {
        /// The numeric column.
        column: String,
    },
}

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
