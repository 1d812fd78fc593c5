//! # tsv-sheets-io
//!
//! TSV file reader and writer for tsv-sheets.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{TsvError, TsvResult};
pub use options::{LineTerminator, TsvReadOptions, TsvWriteOptions};
pub use reader::TsvReader;
pub use writer::TsvWriter;
