//! TSV writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::TsvResult;
use crate::options::{LineTerminator, TsvWriteOptions};
use tsv_sheets_core::Document;

/// TSV file writer
pub struct TsvWriter;

impl TsvWriter {
    /// Write a document to a TSV file, replacing any existing content
    pub fn write_file<P: AsRef<Path>>(
        document: &Document,
        path: P,
        options: &TsvWriteOptions,
    ) -> TsvResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Self::write(document, BufWriter::new(file), options)?;

        tracing::debug!(
            path = %path.display(),
            rows = document.len(),
            "wrote TSV file"
        );
        Ok(())
    }

    /// Write a document to a writer
    pub fn write<W: Write>(
        document: &Document,
        mut writer: W,
        options: &TsvWriteOptions,
    ) -> TsvResult<()> {
        let text = Self::write_string(document, options);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Render a document as TSV text using the write options
    pub fn write_string(document: &Document, options: &TsvWriteOptions) -> String {
        let mut text = document.to_tsv_string();

        if options.line_terminator != LineTerminator::LF {
            text = text.replace('\n', options.line_terminator.as_str());
        }

        if options.trailing_newline && !document.is_empty() {
            text.push_str(options.line_terminator.as_str());
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tsv_sheets_core::Cell;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.push_cells(["Name", "Height"]);
        doc.push_cells([Cell::from("Frank"), Cell::from(5.6)]);
        doc
    }

    #[test]
    fn test_default_options_match_serialize() {
        let doc = sample();
        assert_eq!(
            TsvWriter::write_string(&doc, &TsvWriteOptions::default()),
            doc.to_tsv_string()
        );
    }

    #[test]
    fn test_crlf_and_trailing_newline() {
        let options = TsvWriteOptions {
            line_terminator: LineTerminator::CRLF,
            trailing_newline: true,
        };
        assert_eq!(
            TsvWriter::write_string(&sample(), &options),
            "Name\tHeight\r\nFrank\t5,6\r\n"
        );
    }

    #[test]
    fn test_empty_document_has_no_trailing_newline() {
        let options = TsvWriteOptions {
            trailing_newline: true,
            ..Default::default()
        };
        assert_eq!(TsvWriter::write_string(&Document::new(), &options), "");
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buf = Vec::new();
        TsvWriter::write(&sample(), &mut buf, &TsvWriteOptions::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Name\tHeight\nFrank\t5,6");
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");

        TsvWriter::write_file(&sample(), &path, &TsvWriteOptions::default()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Name\tHeight\nFrank\t5,6"
        );
    }
}
