//! Error types for matriz-cli

use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Operand is not a usable matrix (no row groups, or ragged rows)
    #[error("Invalid matrix: {0}")]
    InvalidMatrix(String),

    /// Matriz error
    #[error("Matriz error: {0}")]
    Matriz(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidMatrix(_) => ExitCode::from(2),
            Self::Matriz(_) => ExitCode::from(1),
        }
    }
}

impl From<matriz::error::MatrizError> for CliError {
    fn from(e: matriz::error::MatrizError) -> Self {
        Self::Matriz(e.to_string())
    }
}
