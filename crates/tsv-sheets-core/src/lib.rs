//! # tsv-sheets-core
//!
//! Core data structures for the tsv-sheets library.
//!
//! This crate provides the in-memory model of a tab-separated table:
//! - [`Cell`] - A field stored as text that can be read and changed as a number
//! - [`Row`] - Cells keyed by column index
//! - [`Document`] - Rows keyed by row index, parsed from and written to TSV text
//!
//! None of the regular operations fail. Reads of missing rows or cells
//! through the `_mut` accessors create them, arithmetic on text is skipped,
//! and lookups fall back to a default. Strict `try_*` variants return
//! [`Error`] instead.
//!
//! ## Example
//!
//! ```rust
//! use tsv_sheets_core::{Cell, Document};
//!
//! let mut doc = Document::new();
//! doc.push_cells(["Integer", "Decimal"]);
//! doc.push_cells([Cell::from(4), Cell::from(2.2)]);
//!
//! doc.row_mut(1).cell_mut(1).add("2,24");
//!
//! assert_eq!(doc.to_tsv_string(), "Integer\tDecimal\n4\t4,44");
//! ```

pub mod cell;
pub mod document;
pub mod error;
pub mod row;

// Re-exports for convenience
pub use cell::{Cell, CellEq, Operand};
pub use document::Document;
pub use error::{Error, Result};
pub use row::Row;
