//! Cell value type

use std::fmt;
use std::ops::{AddAssign, SubAssign};

use super::number;
use super::operand::{CellEq, Operand};
use crate::error::{Error, Result};

/// A single TSV field.
///
/// The value is kept as text, always with a period as the decimal separator.
/// Text that reads as a number (see [`Cell::is_number`]) can be used in
/// arithmetic, and is displayed with a comma decimal separator.
///
/// ```rust
/// use tsv_sheets_core::Cell;
///
/// let mut cell = Cell::from(2.2);
/// cell.add("2,24");
/// assert_eq!(cell.as_str(), "4.44");
/// assert_eq!(cell.display_string(), "4,44");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct Cell {
    text: String,
}

impl Cell {
    /// Create a cell from text.
    ///
    /// Comma-decimal text is rewritten with a period when that makes it
    /// numeric, and numeric text loses superfluous trailing zeros.
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        let mut text = number::normalize_decimal(&text).unwrap_or(text);
        number::strip_trailing_zeros(&mut text);
        Self { text }
    }

    /// Create a cell holding an integer
    pub fn from_int(value: i64) -> Self {
        Self {
            text: value.to_string(),
        }
    }

    /// Create a cell holding a float, rendered with six decimals and
    /// trimmed of trailing zeros
    pub fn from_float(value: f64) -> Self {
        Self {
            text: number::format_float(value),
        }
    }

    /// The stored text, period decimal separator included
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the cell, returning the stored text
    pub fn into_string(self) -> String {
        self.text
    }

    /// Check whether the stored text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether the stored text is numeric text.
    ///
    /// The whole text must parse as a float. Text whose value is zero (`"0"`,
    /// `"0.000000"`) is not treated as a number, while text starting with a
    /// NUL character always is (with value zero).
    pub fn is_number(&self) -> bool {
        self.parse().is_some()
    }

    /// The value truncated toward zero, or 0 if the cell is not a number
    pub fn number(&self) -> i64 {
        self.parse().map_or(0, |v| v.trunc() as i64)
    }

    /// The value as a float, or 0 if the cell is not a number
    pub fn precise_number(&self) -> f64 {
        self.parse().unwrap_or(0.0)
    }

    /// The value as a float, or [`Error::NotANumber`]
    pub fn parse_number(&self) -> Result<f64> {
        self.parse()
            .ok_or_else(|| Error::NotANumber(self.text.clone()))
    }

    /// The text as written to TSV output.
    ///
    /// Numeric text uses a comma as decimal separator; anything else is
    /// returned verbatim.
    pub fn display_string(&self) -> String {
        if self.is_number() {
            self.text.replace('.', ",")
        } else {
            self.text.clone()
        }
    }

    /// Overwrite the cell with a new value
    pub fn set<T: Into<Cell>>(&mut self, value: T) {
        *self = value.into();
    }

    /// Add to the cell in place.
    ///
    /// Does nothing when the cell is not a number. A text operand that is
    /// not a number (or any text added to a non-numeric cell) is appended
    /// to the stored text instead.
    pub fn add<T: Into<Operand>>(&mut self, operand: T) {
        let operand = operand.into();
        match (self.parse(), operand.value()) {
            (Some(current), Some(value)) => self.store(current + value),
            _ => {
                if let Operand::Text(text) = operand {
                    self.text.push_str(&text);
                }
            }
        }
    }

    /// Subtract from the cell in place.
    ///
    /// Does nothing when either side is not a number.
    pub fn sub<T: Into<Operand>>(&mut self, operand: T) {
        if let (Some(current), Some(value)) = (self.parse(), operand.into().value()) {
            self.store(current - value);
        }
    }

    /// Arithmetic-only [`add`](Self::add) that reports why it could not run
    pub fn try_add<T: Into<Operand>>(&mut self, operand: T) -> Result<()> {
        let (current, value) = self.checked_operands(operand.into())?;
        self.store(current + value);
        Ok(())
    }

    /// [`sub`](Self::sub) that reports why it could not run
    pub fn try_sub<T: Into<Operand>>(&mut self, operand: T) -> Result<()> {
        let (current, value) = self.checked_operands(operand.into())?;
        self.store(current - value);
        Ok(())
    }

    /// Compare against a number (parsed value) or text (raw stored text)
    pub fn equals<T: CellEq + ?Sized>(&self, other: &T) -> bool {
        other.matches_cell(self)
    }

    pub(crate) fn parse(&self) -> Option<f64> {
        number::parse_numeric(&self.text)
    }

    fn checked_operands(&self, operand: Operand) -> Result<(f64, f64)> {
        let current = self.parse_number()?;
        let value = operand.value().ok_or_else(|| match operand {
            Operand::Text(text) => Error::InvalidOperand(text),
            other => Error::InvalidOperand(format!("{:?}", other)),
        })?;
        Ok((current, value))
    }

    fn store(&mut self, value: f64) {
        self.text = number::format_float(value);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_string())
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::from_int(n as i64)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::from_int(n)
    }
}

impl From<f32> for Cell {
    fn from(n: f32) -> Self {
        Cell::from_float(n as f64)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::from_float(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::new(s)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::new(s)
    }
}

impl From<&Cell> for Cell {
    fn from(cell: &Cell) -> Self {
        cell.clone()
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.text
    }
}

impl<T: Into<Operand>> AddAssign<T> for Cell {
    fn add_assign(&mut self, rhs: T) {
        self.add(rhs);
    }
}

impl<T: Into<Operand>> SubAssign<T> for Cell {
    fn sub_assign(&mut self, rhs: T) {
        self.sub(rhs);
    }
}

impl PartialEq<i64> for Cell {
    fn eq(&self, other: &i64) -> bool {
        self.equals(other)
    }
}

impl PartialEq<f64> for Cell {
    fn eq(&self, other: &f64) -> bool {
        self.equals(other)
    }
}

impl PartialEq<str> for Cell {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Cell {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
