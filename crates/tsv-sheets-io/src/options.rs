//! TSV options

/// Options for reading TSV files
#[derive(Debug, Clone, Default)]
pub struct TsvReadOptions {
    /// Drop a `\r` at the end of each line before splitting fields
    /// (default: false, so the text is read exactly as written)
    pub strip_carriage_return: bool,
}

/// Options for writing TSV files
#[derive(Debug, Clone)]
pub struct TsvWriteOptions {
    /// Line terminator between rows
    pub line_terminator: LineTerminator,
    /// End the last row with a line terminator too
    pub trailing_newline: bool,
}

impl Default for TsvWriteOptions {
    fn default() -> Self {
        Self {
            line_terminator: LineTerminator::LF,
            trailing_newline: false,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
}

impl LineTerminator {
    /// The terminator's bytes as text
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::LF => "\n",
            LineTerminator::CRLF => "\r\n",
        }
    }
}
