//! Error types shared across the crate

use thiserror::Error;

/// Errors raised while building or loading a triangle
#[derive(Error, Debug)]
pub enum TriangleError {
    #[error("Triangle needs at least one origin and two development periods (got {origins}x{developments})")]
    TooSmall { origins: usize, developments: usize },

    #[error("Origin {origin} has {found} values, expected {expected}")]
    Shape {
        origin: String,
        expected: usize,
        found: usize,
    },

    #[error("Origin {origin} has an observed value at development {development} after an unobserved one")]
    Gap { origin: String, development: String },

    #[error("Non-finite value at origin {origin}, development {development}")]
    NonFinite { origin: String, development: String },

    #[error("Duplicate value for origin {origin}, development {development}")]
    Duplicate { origin: String, development: String },

    #[error("Origin label {0} appears more than once")]
    DuplicateOrigin(String),

    #[error("Development label {0} appears more than once")]
    DuplicateDevelopment(String),

    #[error("Cannot parse '{text}' as a number on line {line}")]
    Parse { line: u64, text: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by factor grid operations
///
/// Out-of-bounds addressing is a caller contract violation; it is reported
/// rather than panicking so that presentation layers can ignore stray clicks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} link-ratio grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Column {col} is outside the {cols} development columns")]
    ColumnOutOfBounds { col: usize, cols: usize },

    #[error("'{text}' is not a valid development factor for column {col}")]
    InvalidFactor { col: usize, text: String },
}

/// Errors raised when building a rate index
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndexError {
    #[error("{origins} origins but {changes} rate changes")]
    LengthMismatch { origins: usize, changes: usize },

    #[error("Rate change {change} at origin {origin} leaves a non-positive index level")]
    NonPositive { origin: String, change: f64 },

    #[error("Index needs at least one origin")]
    Empty,
}

/// Errors raised when reading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}
