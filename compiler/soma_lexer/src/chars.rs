//! Character classification.
//!
//! ASCII checks go through byte comparisons or the identifier table;
//! non-ASCII code points are classified by Unicode General Category:
//! letters are `L*`, digits are `Nd`, and case is `Lu` / `Ll` only.

use std::fmt;

use unicode_general_category::{get_general_category, GeneralCategory};

/// 256-byte lookup table for ASCII identifier bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// NUL and every non-ASCII byte map to `false`, which ends the fast path.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_ASCII_IDENT_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is an ASCII identifier byte.
#[inline]
pub(crate) fn is_ascii_ident_byte(b: u8) -> bool {
    IS_ASCII_IDENT_TABLE[b as usize]
}

/// Returns `true` for a character that may appear inside an identifier.
#[inline]
pub(crate) fn is_ident_continue(ch: char) -> bool {
    is_letter(ch) || is_digit(ch)
}

/// Letters (`L*`) and underscore.
#[inline]
pub(crate) fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || ch == '_'
        || (!ch.is_ascii()
            && matches!(
                get_general_category(ch),
                GeneralCategory::UppercaseLetter
                    | GeneralCategory::LowercaseLetter
                    | GeneralCategory::TitlecaseLetter
                    | GeneralCategory::ModifierLetter
                    | GeneralCategory::OtherLetter
            ))
}

/// Decimal digits (`Nd`). Superscripts, fractions and letter numerals
/// such as `²`, `½` and `Ⅷ` are not digits.
#[inline]
pub(crate) fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
        || (!ch.is_ascii()
            && matches!(get_general_category(ch), GeneralCategory::DecimalNumber))
}

/// Uppercase letters (`Lu`); starts an upper identifier or keyword.
#[inline]
pub(crate) fn is_upper(ch: char) -> bool {
    ch.is_ascii_uppercase()
        || (!ch.is_ascii()
            && matches!(get_general_category(ch), GeneralCategory::UppercaseLetter))
}

/// Lowercase letters (`Ll`); starts a lower identifier or keyword.
#[inline]
pub(crate) fn is_lower(ch: char) -> bool {
    ch.is_ascii_lowercase()
        || (!ch.is_ascii()
            && matches!(get_general_category(ch), GeneralCategory::LowercaseLetter))
}

/// Characters that form binary selectors.
#[inline]
pub(crate) fn is_binary(ch: char) -> bool {
    matches!(
        ch,
        '!' | '*' | '/' | '+' | '|' | '&' | '-' | '>' | '<' | '=' | '?' | '\\' | '~' | '^' | '%'
    )
}

/// A code point rendered as `U+XXXX 'c'` in messages.
///
/// The quoted character is omitted when it is not printable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CodePoint(pub char);

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = self.0;
        if ch.is_control() {
            write!(f, "U+{:04X}", u32::from(ch))
        } else {
            write!(f, "U+{:04X} '{ch}'", u32::from(ch))
        }
    }
}
