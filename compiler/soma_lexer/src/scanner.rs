//! Hand-written scanner producing [`Lexeme`] values on demand.
//!
//! The scanner is pull-based: each call to [`Scanner::scan`] skips
//! whitespace, classifies the current character, and consumes exactly one
//! token. Malformed input is reported through the error side channel and
//! never interrupts the token stream, which always ends in
//! [`Token::EndOfInput`]. [`Scanner::lexemes`] wraps the same loop as an
//! iterator that stops before it.
//!
//! # Design
//!
//! Classification runs in a fixed order: digits, uppercase letters,
//! lowercase letters, binary-selector characters, then single-character
//! punctuation. Identifier runs use the cursor's ASCII fast path and fall
//! back to code-point decoding on the first non-ASCII byte.

use std::borrow::Cow;

use crate::chars::{is_binary, is_digit, is_ident_continue, is_lower, is_upper, CodePoint};
use crate::cursor::{Cursor, EncodingIssue, EncodingIssueKind};
use crate::lex_error::{ErrorHandler, LexError, LexErrorKind};
use crate::{Position, SourceFile, Token};

/// Byte order mark, only skipped as the very first character.
const BOM: char = '\u{FEFF}';

/// A scanned token: its start offset, category, and source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// Byte offset of the first character of the token.
    pub pos: usize,
    /// Token category.
    pub token: Token,
    /// The source text that produced the token.
    ///
    /// Attributes exclude the `@` and `:` markers; `EndOfInput` is `"EOF"`.
    pub literal: Cow<'a, str>,
}

/// Scanner state for one source text.
///
/// The lifetime `'a` covers both the borrowed source and the error
/// handler. A scanner is single-owner; tokenizing several texts
/// concurrently takes one scanner per text.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    err: Option<ErrorHandler<'a>>,
    error_count: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over an anonymous string with no error handler.
    ///
    /// Errors are still counted; see [`Scanner::error_count`].
    pub fn new(text: &'a str) -> Self {
        Self::init(SourceFile::new("", text.len()), text.as_bytes(), None)
    }

    /// Prepare a scanner over `src`, positioned on its first character.
    ///
    /// `file` supplies the name used in positions and receives the line
    /// starts found while scanning. A file reused from an earlier scan of
    /// the same text keeps its existing lines. A leading byte order mark is
    /// skipped. `err`, if present, is called for every lexical error,
    /// possibly already from here if the first character is malformed.
    ///
    /// # Panics
    ///
    /// Panics if `file.size()` differs from `src.len()`.
    pub fn init(file: SourceFile, src: &'a [u8], err: Option<ErrorHandler<'a>>) -> Self {
        assert!(
            file.size() == src.len(),
            "file size ({}) does not match src len ({})",
            file.size(),
            src.len()
        );
        tracing::trace!(file = file.name(), len = src.len(), "scanner initialized");

        let mut scanner = Self {
            cursor: Cursor::new(src, file),
            err,
            error_count: 0,
        };
        scanner.advance();
        if scanner.cursor.current() == Some(BOM) {
            scanner.advance();
        }
        scanner
    }

    /// Number of lexical errors encountered so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Position tracker fed by this scanner.
    pub fn file(&self) -> &SourceFile {
        self.cursor.file()
    }

    /// Resolve a byte offset using the lines seen so far.
    pub fn position(&self, offset: usize) -> Position {
        self.cursor.file().position(offset)
    }

    /// Byte offset of the start of the line holding the current character.
    pub fn line_offset(&self) -> usize {
        self.cursor.line_offset()
    }

    /// Consume the scanner, returning its position tracker for reuse.
    pub fn into_file(self) -> SourceFile {
        self.cursor.into_file()
    }

    /// Iterate over the remaining lexemes, stopping before `EndOfInput`.
    ///
    /// The scanner stays usable afterwards, for example to read
    /// [`Scanner::error_count`].
    pub fn lexemes(&mut self) -> Lexemes<'_, 'a> {
        Lexemes { scanner: self }
    }

    /// Scan the next token.
    ///
    /// Returns `Token::EndOfInput` with literal `"EOF"` once the source is
    /// exhausted; subsequent calls keep returning it.
    pub fn scan(&mut self) -> Lexeme<'a> {
        self.skip_whitespace();

        let pos = self.cursor.offset();
        let Some(ch) = self.cursor.current() else {
            return Lexeme {
                pos,
                token: Token::EndOfInput,
                literal: Cow::Borrowed("EOF"),
            };
        };

        let token = if is_digit(ch) {
            self.scan_integer();
            Token::Integer
        } else if is_upper(ch) {
            self.scan_selector(Token::UpperIdentifier, Token::UpperKeyword)
        } else if is_lower(ch) {
            self.scan_selector(Token::LowerIdentifier, Token::LowerKeyword)
        } else if is_binary(ch) {
            self.scan_binary(pos)
        } else {
            return self.scan_punctuation(pos, ch);
        };

        Lexeme {
            pos,
            token,
            literal: self.cursor.slice(pos, self.cursor.offset()),
        }
    }

    // ─── Character advance ───────────────────────────────────────────

    /// Read the next code point, reporting malformed input.
    #[inline]
    fn advance(&mut self) {
        if let Some(issue) = self.cursor.bump() {
            self.encoding_error(issue);
        }
    }

    fn skip_whitespace(&mut self) {
        while self.cursor.current().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    // ─── Errors ──────────────────────────────────────────────────────

    fn encoding_error(&mut self, issue: EncodingIssue) {
        let kind = match issue.kind {
            EncodingIssueKind::Nul => LexErrorKind::IllegalNul,
            EncodingIssueKind::InvalidUtf8 => LexErrorKind::IllegalEncoding,
        };
        self.error(issue.offset, kind);
    }

    fn error(&mut self, offset: usize, kind: LexErrorKind) {
        let err = LexError {
            pos: self.cursor.file().position(offset),
            kind,
        };
        tracing::debug!(%err, "lexical error");
        if let Some(handler) = self.err.as_mut() {
            handler(&err);
        }
        self.error_count += 1;
    }

    // ─── Numbers, identifiers, selectors ─────────────────────────────

    fn scan_integer(&mut self) {
        while self.cursor.current().is_some_and(is_digit) {
            self.advance();
        }
    }

    /// Identifier, optionally turned into a keyword by a trailing `:`.
    fn scan_selector(&mut self, ident: Token, keyword: Token) -> Token {
        self.scan_identifier();
        if self.cursor.current() == Some(':') {
            self.advance();
            keyword
        } else {
            ident
        }
    }

    /// Consume the run of identifier characters at the current position.
    /// The run may be empty.
    ///
    /// Be careful when making changes to this function: identifier
    /// scanning dominates scanning time. ASCII runs are consumed by the
    /// cursor without decoding; the first NUL or non-ASCII byte switches
    /// to one code point at a time for the remainder of the run.
    fn scan_identifier(&mut self) {
        if !self.cursor.current().is_some_and(is_ident_continue) {
            return;
        }
        if self.cursor.eat_ascii_ident() {
            return;
        }
        self.advance();
        while self.cursor.current().is_some_and(is_ident_continue) {
            self.advance();
        }
    }

    fn scan_binary(&mut self, pos: usize) -> Token {
        while self.cursor.current().is_some_and(is_binary) {
            self.advance();
        }
        if self.cursor.slice(pos, self.cursor.offset()) == "->" {
            Token::Define
        } else {
            Token::Binary
        }
    }

    // ─── Punctuation, attributes, quoted text ────────────────────────

    fn scan_punctuation(&mut self, pos: usize, ch: char) -> Lexeme<'a> {
        // NUL and invalid UTF-8 were already reported when decoded.
        let reported = self.cursor.is_malformed();
        self.advance();

        let token = match ch {
            '@' => return self.scan_attribute(pos),
            '\'' => {
                self.scan_quoted(b'\'', LexErrorKind::UnterminatedComment);
                Token::Comment
            }
            '"' => {
                self.scan_quoted(b'"', LexErrorKind::UnterminatedString);
                Token::String
            }
            ':' => {
                if self.cursor.current() == Some('=') {
                    self.advance();
                    Token::Assign
                } else {
                    self.error(pos, LexErrorKind::ExpectedAssign);
                    Token::Illegal
                }
            }
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,
            '[' => Token::LeftBracket,
            ']' => Token::RightBracket,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            ',' => Token::Comma,
            ';' => Token::SemiColon,
            '.' => Token::Period,
            _ => {
                if !reported {
                    self.error(pos, LexErrorKind::IllegalCharacter(CodePoint(ch)));
                }
                Token::Illegal
            }
        };

        Lexeme {
            pos,
            token,
            literal: self.cursor.slice(pos, self.cursor.offset()),
        }
    }

    /// `@name` or `@name:`; the cursor is just past the `@`.
    fn scan_attribute(&mut self, pos: usize) -> Lexeme<'a> {
        let start = self.cursor.offset();
        self.scan_identifier();
        let literal = self.cursor.slice(start, self.cursor.offset());

        let token = if self.cursor.current() == Some(':') {
            self.advance();
            Token::AttributeSet
        } else {
            Token::AttributeGet
        };
        Lexeme {
            pos,
            token,
            literal,
        }
    }

    /// Consume a quoted body through the closing `delim`, or to the end of
    /// input, reporting `unterminated` in the latter case. The cursor is
    /// just past the opening delimiter.
    fn scan_quoted(&mut self, delim: u8, unterminated: LexErrorKind) {
        let close = char::from(delim);
        while let Some(ch) = self.cursor.current() {
            if ch == close {
                break;
            }
            if let Some(issue) = self.cursor.bump_skipping_plain(delim) {
                self.encoding_error(issue);
            }
        }
        if self.cursor.current() != Some(close) {
            self.error(self.cursor.offset(), unterminated);
        }
        self.advance();
    }
}

/// Iterator returned by [`Scanner::lexemes`].
pub struct Lexemes<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
}

impl<'a> Iterator for Lexemes<'_, 'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Lexeme<'a>> {
        let lexeme = self.scanner.scan();
        if lexeme.token == Token::EndOfInput {
            None
        } else {
            Some(lexeme)
        }
    }
}

/// Convenience function: tokenize a string and collect all lexemes.
///
/// Returns every lexeme except the final `EndOfInput`. Lexical errors are
/// not reported; construct a [`Scanner`] with an [`ErrorHandler`] to see
/// them.
pub fn tokenize(text: &str) -> Vec<Lexeme<'_>> {
    Scanner::new(text).lexemes().collect()
}
