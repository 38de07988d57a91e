//! Error types for the Warshall engine
//!
//! The stepper itself is total and never fails. Errors only arise at the
//! edges: building or parsing a matrix, loading configuration, enforcing
//! size limits and driving a controller that has not been started.

//-----------------------------------------------------------------------------
// Error Types
//-----------------------------------------------------------------------------

use thiserror::Error;

/// Main error type for the warshall-core crate.
#[derive(Error, Debug)]
pub enum StepperError {
    /// A row does not have as many entries as there are rows.
    #[error("Matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell holds something other than 0 or 1.
    #[error("Invalid value {value} at ({row}, {col}): only 0 and 1 are allowed")]
    InvalidCell { row: usize, col: usize, value: u8 },

    /// A token in the textual matrix format could not be read.
    #[error("Cannot parse matrix line {line}: unexpected token {token:?}")]
    Parse { line: usize, token: String },

    /// The matrix exceeds the configured size limit.
    #[error("Matrix of size {size} exceeds the maximum of {max}")]
    MatrixTooLarge { size: usize, max: usize },

    /// A control operation was issued before any run was started.
    #[error("No run has been started")]
    NotStarted,

    /// Configuration could not be read or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations.
pub type StepperResult<T> = Result<T, StepperError>;
