//! TSV reader

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::{TsvError, TsvResult};
use crate::options::TsvReadOptions;
use tsv_sheets_core::Document;

/// TSV file reader
pub struct TsvReader;

impl TsvReader {
    /// Read a TSV file into a document
    pub fn read_file<P: AsRef<Path>>(path: P, options: &TsvReadOptions) -> TsvResult<Document> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|source| TsvError::Utf8 {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::read_str(&text, options);
        tracing::debug!(
            path = %path.display(),
            rows = document.len(),
            "read TSV file"
        );
        Ok(document)
    }

    /// Read TSV from a reader into a document
    pub fn read<R: Read>(mut reader: R, options: &TsvReadOptions) -> TsvResult<Document> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::read_str(&text, options))
    }

    /// Parse TSV text into a document
    pub fn read_str(text: &str, options: &TsvReadOptions) -> Document {
        let mut document = Document::new();

        if options.strip_carriage_return {
            let cleaned = text
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
                .collect::<Vec<_>>()
                .join("\n");
            document.load_str(&cleaned);
        } else {
            document.load_str(text);
        }

        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use tsv_sheets_core::Row;

    #[test]
    fn test_read_from_reader() {
        let doc = TsvReader::read(
            Cursor::new("Name\tAge\nMario\t25"),
            &TsvReadOptions::default(),
        )
        .unwrap();

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.row(1), Some(&Row::from(["Mario", "25"])));
    }

    #[test]
    fn test_carriage_returns_kept_by_default() {
        let doc = TsvReader::read_str("a\tb\r\nc\r\n", &TsvReadOptions::default());
        assert_eq!(doc.row(0).and_then(|r| r.cell(1)).map(|c| c.as_str()), Some("b\r"));
    }

    #[test]
    fn test_strip_carriage_return() {
        let options = TsvReadOptions {
            strip_carriage_return: true,
        };
        let doc = TsvReader::read_str("a\tb\r\nc\r\n", &options);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.to_tsv_string(), "a\tb\nc");
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.tsv");
        std::fs::write(&path, "Milk\t2\nEggs\t12").unwrap();

        let doc = TsvReader::read_file(&path, &TsvReadOptions::default()).unwrap();
        assert_eq!(doc.to_tsv_string(), "Milk\t2\nEggs\t12");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TsvReader::read_file(dir.path().join("nope.tsv"), &TsvReadOptions::default());
        assert!(matches!(result, Err(TsvError::Io(_))));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.tsv");
        std::fs::write(&path, [b'a', 0xFF, b'\t', b'b']).unwrap();

        let result = TsvReader::read_file(&path, &TsvReadOptions::default());
        assert!(matches!(result, Err(TsvError::Utf8 { .. })));
    }
}
