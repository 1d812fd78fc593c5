//! TSV I/O error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for TSV I/O operations
pub type TsvResult<T> = std::result::Result<T, TsvError>;

/// Errors that can occur while reading or writing TSV files
#[derive(Debug, Error)]
pub enum TsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not valid UTF-8
    #[error("File {} is not valid UTF-8: {source}", path.display())]
    Utf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
