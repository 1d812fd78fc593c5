//! Error types for tsv-sheets-core
//!
//! The regular cell, row and document operations never fail. These errors
//! only come out of the strict variants (`parse_number`, `try_add`,
//! `try_sub`, `try_row_by_value`).

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tsv-sheets-core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The cell text is not numeric text
    #[error("Cell value is not a number: {0:?}")]
    NotANumber(String),

    /// An arithmetic operand could not be read as a number
    #[error("Operand is not a number: {0:?}")]
    InvalidOperand(String),

    /// No row starts with the requested value
    #[error("No row starts with value: {0:?}")]
    RowNotFound(String),
}
