//! Error types for matriz operations.
//!
//! Provides typed failures for dimension checks and element access.

use std::fmt;

/// Main error type for matriz operations.
///
/// Arithmetic reports incompatible operand shapes as `DimensionMismatch`;
/// element access reports out-of-bound coordinates as `IndexOutOfRange`.
/// Ragged input is not an error: it is a soft condition surfaced through
/// [`Matrix::is_valid`](crate::primitives::Matrix::is_valid).
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Element access outside the matrix bounds.
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Number of rows in the matrix
        rows: usize,
        /// Nominal number of columns (first-row length)
        cols: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Index ({row}, {col}) out of range for {rows}x{cols} matrix"
                )
            }
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}

impl From<String> for MatrizError {
    fn from(msg: String) -> Self {
        MatrizError::Other(msg)
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MatrizError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<MatrizError> for &str {
    fn eq(&self, other: &MatrizError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;
