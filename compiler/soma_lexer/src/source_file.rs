//! Position tracking for a single source text.
//!
//! A [`SourceFile`] records the byte offset of every line start discovered
//! while scanning, enabling O(log L) offset to line/column lookup by binary
//! search. The table is append-only and is fed exclusively by the scanner's
//! forward pass, so line starts always arrive in increasing order.
//!
//! Columns are 1-based byte counts from the start of the line.

use std::fmt;

/// A named source text of known size with its line-start table.
///
/// # Example
///
/// ```
/// use soma_lexer::{Scanner, SourceFile};
///
/// let src = "line1\nline2\nline3";
/// let mut scanner = Scanner::init(SourceFile::new("demo.soma", src.len()), src.as_bytes(), None);
/// while scanner.scan().token != soma_lexer::Token::EndOfInput {}
///
/// let file = scanner.file();
/// assert_eq!(file.line_col(0), (1, 1));  // 'l' in line1
/// assert_eq!(file.line_col(6), (2, 1));  // 'l' in line2
/// assert_eq!(file.line_col(14), (3, 3)); // 'n' in line3
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// Name used in position messages; may be empty.
    name: String,
    /// Declared size of the source in bytes.
    size: usize,
    /// Byte offset of each line start.
    /// lines[0] = 0 (line 1 starts at byte 0)
    /// lines[1] = byte after first \n (line 2 start)
    /// etc.
    lines: Vec<usize>,
}

impl SourceFile {
    /// Create a file with the given name and declared size.
    ///
    /// Only line 1 is known until a scanner walks the text.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        SourceFile {
            name: name.into(),
            size,
            lines: vec![0],
        }
    }

    /// File name used in position messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared size of the source in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of lines discovered so far.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line-start offsets discovered so far, in increasing order.
    pub fn lines(&self) -> &[usize] {
        &self.lines
    }

    /// Record `offset` as the start of a new line.
    ///
    /// Offsets that are not past the last known line start, or that lie
    /// outside the source, are ignored. Re-scanning the same text with a
    /// reused file is therefore harmless.
    pub(crate) fn add_line(&mut self, offset: usize) {
        let last = self.lines.last().copied().unwrap_or(0);
        if offset > last && offset < self.size {
            self.lines.push(offset);
        }
    }

    /// Get the byte offset of a line start (1-based line number).
    ///
    /// Returns `None` if the line number is out of range.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        if line == 0 {
            return None;
        }
        self.lines.get(line - 1).copied()
    }

    /// Get 1-based (line, column) for a byte offset.
    ///
    /// Offsets past the declared size are clamped to the size.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.size);
        // Binary search for the largest line start <= offset
        let line_idx = match self.lines.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let line_start = self.lines.get(line_idx).copied().unwrap_or(0);
        (line_idx + 1, offset - line_start + 1)
    }

    /// Full position for a byte offset.
    pub fn position(&self, offset: usize) -> Position {
        let (line, column) = self.line_col(offset);
        Position {
            filename: self.name.clone(),
            offset: offset.min(self.size),
            line,
            column,
        }
    }
}

/// A resolved source position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// File name; empty for anonymous sources.
    pub filename: String,
    /// Byte offset, starting at 0.
    pub offset: usize,
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number (byte count), starting at 1.
    pub column: usize,
}

impl fmt::Display for Position {
    /// Formats as `file:line:column`, or `line:column` for anonymous sources.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filename.is_empty() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "{}:{}:{}", self.filename, self.line, self.column)
        }
    }
}
