//! Arithmetic operands and value comparison for cells

use super::number;
use super::Cell;

/// Right-hand side of an in-place cell mutation (`add`, `sub`)
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Integer operand
    Int(i64),
    /// Floating-point operand
    Float(f64),
    /// Text operand, numeric if it normalizes (comma decimals accepted)
    Text(String),
}

impl Operand {
    /// Numeric value of the operand, if it has one
    pub fn value(&self) -> Option<f64> {
        match self {
            Operand::Int(n) => Some(*n as f64),
            Operand::Float(n) => Some(*n),
            Operand::Text(text) => number::parse_operand(text),
        }
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Int(n as i64)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Int(n)
    }
}

impl From<f32> for Operand {
    fn from(n: f32) -> Self {
        Operand::Float(n as f64)
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Float(n)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_owned())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Text(s)
    }
}

/// Values a [`Cell`] can be compared against.
///
/// Numbers compare against the parsed value of numeric cells (exact float
/// equality). Strings and cells compare against the raw stored text.
pub trait CellEq {
    /// Check whether `cell` holds this value
    fn matches_cell(&self, cell: &Cell) -> bool;
}

impl CellEq for i32 {
    fn matches_cell(&self, cell: &Cell) -> bool {
        cell.parse().is_some_and(|v| v == *self as f64)
    }
}

impl CellEq for i64 {
    fn matches_cell(&self, cell: &Cell) -> bool {
        cell.parse().is_some_and(|v| v == *self as f64)
    }
}

impl CellEq for f32 {
    fn matches_cell(&self, cell: &Cell) -> bool {
        cell.parse().is_some_and(|v| v == *self as f64)
    }
}

impl CellEq for f64 {
    fn matches_cell(&self, cell: &Cell) -> bool {
        cell.parse().is_some_and(|v| v == *self)
    }
}

impl CellEq for str {
    fn matches_cell(&self, cell: &Cell) -> bool {
        cell.as_str() == self
    }
}

impl CellEq for String {
    fn matches_cell(&self, cell: &Cell) -> bool {
        cell.as_str() == self.as_str()
    }
}

impl CellEq for Cell {
    fn matches_cell(&self, cell: &Cell) -> bool {
        self == cell
    }
}

impl<T: CellEq + ?Sized> CellEq for &T {
    fn matches_cell(&self, cell: &Cell) -> bool {
        (**self).matches_cell(cell)
    }
}
