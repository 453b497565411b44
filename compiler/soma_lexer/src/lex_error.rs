//! Lexical error types.
//!
//! Lexical errors never stop the scanner. Each one is counted, logged, and
//! handed to the optional [`ErrorHandler`] installed at construction.

use thiserror::Error;

use crate::chars::CodePoint;
use crate::Position;

/// Callback invoked for every lexical error.
///
/// The error carries the resolved position of the offending input and a
/// [`LexErrorKind`] whose `Display` is the human-readable message.
pub type ErrorHandler<'h> = Box<dyn FnMut(&LexError) + 'h>;

/// A lexical error with its resolved position.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{pos}: {kind}")]
pub struct LexError {
    /// Where the error occurred.
    pub pos: Position,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexical error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("illegal character {0}")]
    IllegalCharacter(CodePoint),
    /// A NUL byte in the source.
    #[error("illegal character NUL")]
    IllegalNul,
    /// A byte sequence that is not valid UTF-8.
    #[error("illegal UTF-8 encoding")]
    IllegalEncoding,
    /// A comment missing its closing `'`.
    #[error("expecting single-quote (') to end the comment")]
    UnterminatedComment,
    /// A string missing its closing `"`.
    #[error("expecting double-quote (\") to end the string")]
    UnterminatedString,
    /// A `:` that is not part of `:=`.
    #[error("expecting '=' after ':'")]
    ExpectedAssign,
}
