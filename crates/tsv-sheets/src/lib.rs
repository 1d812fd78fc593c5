//! # tsv-sheets
//!
//! A Rust library for reading, editing, and writing tab-separated tables.
//!
//! ## Features
//!
//! - Parse TSV text into an editable [`Document`] of [`Row`]s and [`Cell`]s
//! - Cells that read as numbers support in-place arithmetic
//! - Comma decimal separators (`2,24`) are understood on input and used on
//!   output
//! - Load from and save to files
//!
//! ## Example
//!
//! ```rust
//! use tsv_sheets::prelude::*;
//!
//! let mut doc = Document::new();
//! doc.row_mut(0).assign(["Name", "Age", "Job", "NA"]);
//! doc.push_row(["Frank Freeman", "45", "Nuclear Scientist"]);
//!
//! // Remove a specific value from a row
//! doc.row_mut(0).remove_first("NA");
//!
//! // Look rows up by their first cell
//! doc.row_by_value("Frank Freeman").cell_mut(1).add(1);
//!
//! assert_eq!(
//!     doc.to_tsv_string(),
//!     "Name\tAge\tJob\nFrank Freeman\t46\tNuclear Scientist"
//! );
//!
//! // Save to file
//! // doc.save("people.tsv");
//! ```

pub mod prelude;

// Re-export core types
pub use tsv_sheets_core::{
    // Cell types
    Cell,
    CellEq,
    // Main types
    Document,
    // Error types
    Error,
    Operand,
    Result,
    Row,
};

// Re-export I/O types
pub use tsv_sheets_io::{
    LineTerminator, TsvError, TsvReadOptions, TsvReader, TsvResult, TsvWriteOptions, TsvWriter,
};

use std::path::Path;

/// Extension trait for Document to add file I/O
pub trait DocumentExt {
    /// Replace the document's contents with a TSV file.
    ///
    /// Failures are logged and otherwise ignored; the document is left
    /// unchanged.
    fn open<P: AsRef<Path>>(&mut self, path: P);

    /// Write the document to a TSV file.
    ///
    /// Failures are logged and otherwise ignored.
    fn save<P: AsRef<Path>>(&self, path: P);

    /// Replace the document's contents with a TSV file, reporting failures
    fn try_open<P: AsRef<Path>>(&mut self, path: P) -> TsvResult<()>;

    /// Write the document to a TSV file, reporting failures
    fn try_save<P: AsRef<Path>>(&self, path: P) -> TsvResult<()>;
}

impl DocumentExt for Document {
    fn open<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        if let Err(e) = self.try_open(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to open TSV file");
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        if let Err(e) = self.try_save(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save TSV file");
        }
    }

    fn try_open<P: AsRef<Path>>(&mut self, path: P) -> TsvResult<()> {
        *self = TsvReader::read_file(path, &TsvReadOptions::default())?;
        Ok(())
    }

    fn try_save<P: AsRef<Path>>(&self, path: P) -> TsvResult<()> {
        TsvWriter::write_file(self, path, &TsvWriteOptions::default())
    }
}
