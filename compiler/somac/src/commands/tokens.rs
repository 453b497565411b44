//! `tokens`: print the token stream of an expression.

use soma_lexer::{ErrorHandler, LexError, Scanner, SourceFile};

/// Name used in positions of lexical errors found in the expression.
const EXPRESSION_NAME: &str = "<expression>";

/// Tokenize a single expression argument.
///
/// Each token renders as `NAME (literal)` on its own line. Any argument
/// count other than one, or a lone `-h`/`--help`, yields the usage text.
/// Lexical errors are logged as warnings and do not change the listing.
pub fn tokens<S: AsRef<str>>(args: &[S]) -> String {
    let [expr] = args else {
        return tokens_usage();
    };
    let expr = expr.as_ref();
    if matches!(expr, "-h" | "--help") {
        return tokens_usage();
    }

    let report: ErrorHandler<'_> = Box::new(|err: &LexError| tracing::warn!("{err}"));
    let mut scanner = Scanner::init(
        SourceFile::new(EXPRESSION_NAME, expr.len()),
        expr.as_bytes(),
        Some(report),
    );

    let listing: Vec<String> = scanner
        .lexemes()
        .map(|lexeme| format!("{} ({})", lexeme.token, lexeme.literal))
        .collect();
    listing.join("\n")
}

/// Usage text for the `tokens` command.
pub fn tokens_usage() -> String {
    "\
Prints the tokens and literals of the expression.

Usage:
  soma tokens <expression>

Example:
  $ soma tokens \"True := Object new.\"
  UPPER_IDENT (True)
  := (:=)
  UPPER_IDENT (Object)
  LOWER_IDENT (new)
  . (.)
"
    .to_string()
}
