//! Prelude module - common imports for tsv-sheets users
//!
//! ```rust
//! use tsv_sheets::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellEq,
    // Main types
    Document,
    // Extension traits
    DocumentExt,
    // Error types
    Error,
    Operand,
    Result,
    Row,

    // I/O types
    TsvError,
    TsvReadOptions,
    TsvReader,
    TsvWriteOptions,
    TsvWriter,
};
