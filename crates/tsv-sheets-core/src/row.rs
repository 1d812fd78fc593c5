//! Row type

use std::collections::BTreeMap;

use crate::cell::{Cell, CellEq};

/// A TSV record: cells keyed by column index.
///
/// Storage is sparse. Removing a cell leaves a gap, and gaps are written out
/// as empty fields up to the highest occupied column.
///
/// ```rust
/// use tsv_sheets_core::Row;
///
/// let mut row = Row::new();
/// row.push(4);
/// row.push(2.2);
/// row.cell_mut(1).add("2,24");
/// assert_eq!(row.cell(1).unwrap().as_str(), "4.44");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Column index → cell
    cells: BTreeMap<usize, Cell>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied columns
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of fields the row occupies when written out: the highest
    /// occupied column plus one, and never less than one
    pub fn span(&self) -> usize {
        self.cells.keys().next_back().map_or(1, |last| last + 1)
    }

    /// Append a cell.
    ///
    /// The new cell goes to the column equal to the current number of cells,
    /// so after a removal it can land on (and replace) an occupied column.
    pub fn push<T: Into<Cell>>(&mut self, value: T) {
        let index = self.cells.len();
        self.cells.insert(index, value.into());
    }

    /// Get a cell without creating it
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(&index)
    }

    /// Get a cell, inserting an empty one if the column is unoccupied
    pub fn cell_mut(&mut self, index: usize) -> &mut Cell {
        self.cells.entry(index).or_default()
    }

    /// Replace (or create) the cell at `index`
    pub fn set<T: Into<Cell>>(&mut self, index: usize, value: T) {
        self.cells.insert(index, value.into());
    }

    /// Remove the first cell, in column order, that equals `value`.
    ///
    /// Numbers match numeric cells by value; text and cells match the raw
    /// stored text. Returns the removed cell.
    pub fn remove_first<T: CellEq + ?Sized>(&mut self, value: &T) -> Option<Cell> {
        let index = self
            .cells
            .iter()
            .find(|(_, cell)| cell.equals(value))
            .map(|(index, _)| *index)?;
        self.cells.remove(&index)
    }

    /// Replace all cells with `cells`, re-indexed from column 0
    pub fn assign<I, T>(&mut self, cells: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Cell>,
    {
        self.cells.clear();
        for cell in cells {
            self.push(cell);
        }
    }

    /// Remove all cells
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate over occupied columns in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells.iter().map(|(index, cell)| (*index, cell))
    }

    /// Write the row's fields, tab-separated, covering [`span`](Self::span)
    /// columns
    pub(crate) fn write_fields(&self, out: &mut String) {
        for index in 0..self.span() {
            if index > 0 {
                out.push('\t');
            }
            if let Some(cell) = self.cells.get(&index) {
                out.push_str(&cell.display_string());
            }
        }
    }
}

impl<T: Into<Cell>> FromIterator<T> for Row {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut row = Row::new();
        row.assign(iter);
        row
    }
}

impl<T: Into<Cell>> From<Vec<T>> for Row {
    fn from(cells: Vec<T>) -> Self {
        cells.into_iter().collect()
    }
}

impl<T: Into<Cell>, const N: usize> From<[T; N]> for Row {
    fn from(cells: [T; N]) -> Self {
        cells.into_iter().collect()
    }
}
