//! Code-point cursor over the source bytes.
//!
//! The cursor holds the current decoded character together with its byte
//! offset and the offset of the next unread byte. [`Cursor::bump`] is the
//! single-step primitive: it decodes one code point, records line starts,
//! and reports malformed input as an [`EncodingIssue`] value rather than
//! calling back into the scanner.
//!
//! Two bulk operations skip work in the common case:
//! - [`Cursor::eat_ascii_ident`] runs over ASCII identifier bytes without
//!   decoding them.
//! - [`Cursor::bump_skipping_plain`] jumps over plain ASCII content inside
//!   quoted text using `memchr`.
//!
//! Both leave the cursor exactly where repeated `bump` calls would.

use std::borrow::Cow;

use crate::chars::is_ascii_ident_byte;
use crate::SourceFile;

/// Malformed input found while decoding a single code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EncodingIssue {
    /// What was wrong with the bytes.
    pub kind: EncodingIssueKind,
    /// Byte offset of the offending character.
    pub offset: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EncodingIssueKind {
    /// A NUL byte.
    Nul,
    /// A byte sequence that is not valid UTF-8.
    InvalidUtf8,
}

/// Cursor over a borrowed source, owning the line table it feeds.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a [u8],
    /// Current character; `None` once the input is exhausted.
    ch: Option<char>,
    /// Byte offset of `ch`.
    offset: usize,
    /// Byte offset just past `ch`.
    rd_offset: usize,
    /// Byte offset of the start of the current line.
    line_offset: usize,
    /// Whether `ch` was produced by malformed input.
    malformed: bool,
    file: SourceFile,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned before the first character.
    ///
    /// The current character starts out as a space so that the first
    /// `bump` neither records a line nor looks like end of input.
    pub(crate) fn new(src: &'a [u8], file: SourceFile) -> Self {
        Self {
            src,
            ch: Some(' '),
            offset: 0,
            rd_offset: 0,
            line_offset: 0,
            malformed: false,
            file,
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.ch
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub(crate) fn line_offset(&self) -> usize {
        self.line_offset
    }

    /// Whether the current character came from a NUL byte or an invalid
    /// UTF-8 sequence (already reported by `bump`).
    #[inline]
    pub(crate) fn is_malformed(&self) -> bool {
        self.malformed
    }

    pub(crate) fn file(&self) -> &SourceFile {
        &self.file
    }

    pub(crate) fn into_file(self) -> SourceFile {
        self.file
    }

    /// Source text in `start..end`, borrowed when it is valid UTF-8.
    pub(crate) fn slice(&self, start: usize, end: usize) -> Cow<'a, str> {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        String::from_utf8_lossy(&self.src[start..end])
    }

    /// Read the next code point into the current character.
    ///
    /// NUL bytes decode to `'\0'`, invalid UTF-8 decodes to U+FFFD and
    /// consumes a single byte. Both are returned as an issue; decoding then
    /// continues normally.
    pub(crate) fn bump(&mut self) -> Option<EncodingIssue> {
        if self.rd_offset >= self.src.len() {
            self.offset = self.src.len();
            self.start_line_if_newline();
            self.ch = None;
            self.malformed = false;
            return None;
        }

        self.offset = self.rd_offset;
        self.start_line_if_newline();

        let (ch, width, issue) = match self.src[self.rd_offset] {
            0 => ('\0', 1, Some(EncodingIssueKind::Nul)),
            b if b.is_ascii() => (char::from(b), 1, None),
            _ => match decode_utf8(&self.src[self.rd_offset..]) {
                Some((ch, width)) => (ch, width, None),
                None => (
                    char::REPLACEMENT_CHARACTER,
                    1,
                    Some(EncodingIssueKind::InvalidUtf8),
                ),
            },
        };

        self.rd_offset += width;
        self.ch = Some(ch);
        self.malformed = issue.is_some();
        issue.map(|kind| EncodingIssue {
            kind,
            offset: self.offset,
        })
    }

    /// The previous character was a newline, so `offset` opens a new line.
    #[inline]
    fn start_line_if_newline(&mut self) {
        if self.ch == Some('\n') {
            self.line_offset = self.offset;
            self.file.add_line(self.offset);
        }
    }

    /// Advance over ASCII identifier bytes following the current character
    /// without decoding them.
    ///
    /// Returns `true` when the run is complete: the cursor then sits on the
    /// first non-identifier ASCII character, or at end of input. Returns
    /// `false` when a NUL or non-ASCII byte interrupted the run; the next
    /// `bump` decodes that byte and the caller continues one code point at
    /// a time.
    ///
    /// # Contract
    ///
    /// The current character must be an identifier character. Line
    /// bookkeeping is skipped, which is only sound because it is not `'\n'`.
    pub(crate) fn eat_ascii_ident(&mut self) -> bool {
        debug_assert!(self.ch.is_some_and(crate::chars::is_ident_continue));

        let rest = &self.src[self.rd_offset..];
        let Some(run) = rest.iter().position(|&b| !is_ascii_ident_byte(b)) else {
            self.offset = self.src.len();
            self.rd_offset = self.src.len();
            self.ch = None;
            self.malformed = false;
            return true;
        };

        self.rd_offset += run;
        let b = self.src[self.rd_offset];
        if b != 0 && b.is_ascii() {
            // Plain ASCII terminator: no decoding and no line accounting
            // needed, since the preceding character is not '\n'.
            self.ch = Some(char::from(b));
            self.offset = self.rd_offset;
            self.rd_offset += 1;
            self.malformed = false;
            return true;
        }
        false
    }

    /// Step to the next character of a quoted body ending at `delim`.
    ///
    /// Plain ASCII bytes up to the nearest `delim`, newline or NUL are
    /// jumped over with a single `memchr3` search; whatever stops the jump
    /// is then decoded by `bump`. Newlines and non-ASCII bytes always go
    /// through `bump`, so line starts and encoding issues are the same as
    /// for a byte-by-byte walk.
    pub(crate) fn bump_skipping_plain(&mut self, delim: u8) -> Option<EncodingIssue> {
        if self.ch.is_some() && self.ch != Some('\n') {
            let rest = &self.src[self.rd_offset..];
            let stop = memchr::memchr3(delim, b'\n', 0, rest).unwrap_or(rest.len());
            let plain = rest[..stop]
                .iter()
                .position(|b| !b.is_ascii())
                .unwrap_or(stop);
            self.rd_offset += plain;
        }
        self.bump()
    }
}

/// Decode the non-ASCII code point at the start of `bytes`.
///
/// Returns `None` if the leading bytes are not a valid UTF-8 sequence.
fn decode_utf8(bytes: &[u8]) -> Option<(char, usize)> {
    let chunk = &bytes[..bytes.len().min(4)];
    let valid = match std::str::from_utf8(chunk) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&chunk[..e.valid_up_to()]).ok()?,
    };
    valid.chars().next().map(|ch| (ch, ch.len_utf8()))
}

#[cfg(test)]
mod tests;
