//! Scanner for Soma, the Social Machines language.
//!
//! Turns source text into a stream of `(offset, Token, literal)` lexemes.
//! The scanner is hand-written and pull-based: callers invoke
//! [`Scanner::scan`] until it returns [`Token::EndOfInput`], or iterate
//! [`Scanner::lexemes`].
//!
//! # Error handling
//!
//! Lexical errors never abort a scan. Each one produces a [`LexError`]
//! that is counted, logged at `debug` level through `tracing`, and passed
//! to the optional [`ErrorHandler`]. The offending input still yields a
//! token (usually [`Token::Illegal`]) so the stream stays complete.
//!
//! # Positions
//!
//! Token positions are byte offsets. The scanner records line starts in
//! its [`SourceFile`] as it goes, which turns offsets into
//! [`Position`]s with 1-based line and byte-column numbers.
//!
//! ```
//! use soma_lexer::{tokenize, Token};
//!
//! let tokens: Vec<Token> = tokenize("True := Object new.")
//!     .into_iter()
//!     .map(|lx| lx.token)
//!     .collect();
//! assert_eq!(
//!     tokens,
//!     [
//!         Token::UpperIdentifier,
//!         Token::Assign,
//!         Token::UpperIdentifier,
//!         Token::LowerIdentifier,
//!         Token::Period,
//!     ]
//! );
//! ```

mod chars;
mod cursor;
mod lex_error;
mod scanner;
mod source_file;
mod token;

pub use chars::CodePoint;
pub use lex_error::{ErrorHandler, LexError, LexErrorKind};
pub use scanner::{tokenize, Lexeme, Lexemes, Scanner};
pub use source_file::{Position, SourceFile};
pub use token::Token;
