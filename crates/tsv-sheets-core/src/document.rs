//! Document type - the in-memory TSV table

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::row::Row;

/// A TSV table: rows keyed by row index.
///
/// Like [`Row`], storage is sparse and ordered. Text is parsed with
/// [`load_str`](Self::load_str) and produced with
/// [`to_tsv_string`](Self::to_tsv_string).
///
/// ```rust
/// use tsv_sheets_core::Document;
///
/// let mut doc = Document::new();
/// doc.load_str("Name\tAge\nMario\t25");
/// doc.row_mut(1).cell_mut(1).add(1);
/// assert_eq!(doc.to_tsv_string(), "Name\tAge\nMario\t26");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Row index → row
    rows: BTreeMap<usize, Row>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the document has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace the document's contents with parsed TSV text.
    ///
    /// Lines are separated by `\n` and fields by `\t`. A final `\n` does not
    /// start another row. Every line yields a row with at least one cell, so
    /// an empty line becomes a row holding one empty cell.
    ///
    /// Because of the final newline rule, a document whose last row is a
    /// single empty cell loses that row when serialized and loaded again.
    pub fn load_str(&mut self, text: &str) {
        self.rows.clear();

        for line in split_lines(text) {
            self.push_row(line.split('\t').collect::<Row>());
        }

        tracing::trace!(rows = self.rows.len(), "parsed TSV text");
    }

    /// Render the document as TSV text.
    ///
    /// Rows are written in index order from 0 to the highest occupied index,
    /// joined by `\n` with no trailing newline. Missing rows are written as a
    /// single empty field. Numeric cells use a comma decimal separator.
    pub fn to_tsv_string(&self) -> String {
        let mut out = String::new();
        let Some(&last) = self.rows.keys().next_back() else {
            return out;
        };

        for index in 0..=last {
            if index > 0 {
                out.push('\n');
            }
            if let Some(row) = self.rows.get(&index) {
                row.write_fields(&mut out);
            }
        }

        out
    }

    /// Append a row at the index equal to the current number of rows
    pub fn push_row<R: Into<Row>>(&mut self, row: R) {
        let index = self.rows.len();
        self.rows.insert(index, row.into());
    }

    /// Append a row built from `cells`
    pub fn push_cells<I, T>(&mut self, cells: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Cell>,
    {
        self.push_row(cells.into_iter().collect::<Row>());
    }

    /// Get a row without creating it
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Get a row, inserting an empty one if the index is unoccupied
    pub fn row_mut(&mut self, index: usize) -> &mut Row {
        self.rows.entry(index).or_default()
    }

    /// Replace (or create) the row at `index`
    pub fn set_row<R: Into<Row>>(&mut self, index: usize, row: R) {
        self.rows.insert(index, row.into());
    }

    /// Get the first row whose first cell holds exactly `value`.
    ///
    /// Falls back to row 0 (created if absent) when no row matches.
    pub fn row_by_value(&mut self, value: &str) -> &mut Row {
        let index = self.find_index(value).unwrap_or(0);
        self.row_mut(index)
    }

    /// Get the first row whose first cell holds exactly `value`, if any
    pub fn find_row(&self, value: &str) -> Option<&Row> {
        self.find_index(value).and_then(|index| self.rows.get(&index))
    }

    /// [`row_by_value`](Self::row_by_value) without the row 0 fallback
    pub fn try_row_by_value(&mut self, value: &str) -> Result<&mut Row> {
        let index = self
            .find_index(value)
            .ok_or_else(|| Error::RowNotFound(value.to_owned()))?;
        Ok(self.row_mut(index))
    }

    /// Remove the first row, in index order, structurally equal to `row`
    pub fn remove_row(&mut self, row: &Row) -> Option<Row> {
        let index = self
            .rows
            .iter()
            .find(|(_, candidate)| *candidate == row)
            .map(|(index, _)| *index)?;
        self.rows.remove(&index)
    }

    /// Remove all rows
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Iterate over occupied rows in index order
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Row)> {
        self.rows.iter().map(|(index, row)| (*index, row))
    }

    fn find_index(&self, value: &str) -> Option<usize> {
        // A row without column 0 reads it as an empty cell
        self.rows
            .iter()
            .find(|(_, row)| row.cell(0).map_or(value.is_empty(), |c| c.equals(value)))
            .map(|(index, _)| *index)
    }
}

/// Split on `\n` the way a line reader does: no rows for empty text and no
/// extra row after a final newline.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    (!text.is_empty())
        .then(|| body.split('\n'))
        .into_iter()
        .flatten()
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tsv_string())
    }
}

impl FromStr for Document {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut doc = Document::new();
        doc.load_str(s);
        Ok(doc)
    }
}

impl<R: Into<Row>> FromIterator<R> for Document {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut doc = Document::new();
        for row in iter {
            doc.push_row(row);
        }
        doc
    }
}
