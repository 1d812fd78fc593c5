//! Cell-related types
//!
//! This module contains:
//! - [`Cell`] - A single field, stored as text but usable as a number
//! - [`Operand`] - The right-hand side of in-place arithmetic
//! - [`CellEq`] - Values a cell can be compared against

mod number;
mod operand;
mod value;

pub use operand::{CellEq, Operand};
pub use value::Cell;
