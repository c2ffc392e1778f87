//! Error types for catalogue operations.

use thiserror::Error;

use crate::book::{CoverKind, Field};

/// Reasons a book field or a wear operation was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty
    #[error("{0} must not be empty")]
    Empty(Field),

    /// A text field contained one of the forbidden special symbols
    #[error("{field} must not contain special symbols, found {symbol:?} in {value:?}")]
    ForbiddenSymbol {
        /// Offending field
        field: Field,
        /// First forbidden symbol found
        symbol: char,
        /// Rejected value
        value: String,
    },

    /// Genre names are words, not numbers
    #[error("genre must not contain digits, got {0:?}")]
    DigitInGenre(String),

    /// Publication year outside the accepted range
    #[error("year must be between 1800 and 2027, got {0}")]
    YearOutOfRange(i32),

    /// Initial condition outside 0..=100
    #[error("condition must be between 0 and 100, got {0}")]
    ConditionOutOfRange(i32),

    /// Cover name that maps to no known variant
    #[error("unknown cover type: {0:?}")]
    UnknownCover(String),

    /// Damage amounts only ever reduce condition
    #[error("damage must not be negative, got {0}")]
    NegativeDamage(i32),

    /// Only glossy covers can be scratched
    #[error("{0} books cannot be scratched")]
    ScratchesUnsupported(CoverKind),
}

/// Errors raised by the library, its index and its books.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// A book field or wear amount was rejected
    #[error("invalid book: {0}")]
    Validation(#[from] ValidationError),

    /// The ISBN is already in the library or index
    #[error("book with ISBN {isbn} already exists")]
    Duplicate {
        /// ISBN that is already taken
        isbn: String,
    },

    /// A text lookup matched neither an ISBN nor an author
    #[error("no ISBN or author matches {0:?}")]
    KeyNotFound(String),

    /// A lookup key of a type the index cannot search by
    #[error("unsupported lookup key type: {0}")]
    UnsupportedKey(&'static str),
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Failures loading a [`SimulationConfig`](crate::config::SimulationConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed to open
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`SimulationConfig`](crate::config::SimulationConfig)
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
