//! Lexical tokens of the Soma language.
//!
//! [`Token`] is a closed set: the scanner maps every input character to
//! exactly one variant. Display names come from a static table indexed by
//! the token's ordinal, so the mapping is fixed at compile time.

use std::fmt;

/// The set of lexical tokens of the Soma language.
///
/// Discriminants follow declaration order and index into [`NAMES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Token {
    // === Special ===
    Illegal = 0,
    EndOfInput = 1,

    // === Literals ===
    /// `'This is a comment'`
    Comment = 2,
    /// `"This is a string"`
    String = 3,
    /// `42`
    Integer = 4,

    // === Identifiers ===
    /// `firstName`
    LowerIdentifier = 5,
    /// `Person`
    UpperIdentifier = 6,
    /// `ifTrue:`
    LowerKeyword = 7,
    /// `Else:`
    UpperKeyword = 8,
    /// A run of `! * / + | & - > < = ? \ ~ ^ %`
    Binary = 9,
    /// `@name`
    AttributeGet = 10,
    /// `@name:`
    AttributeSet = 11,

    // === Grouping ===
    LeftBrace = 12,
    RightBrace = 13,
    LeftBracket = 14,
    RightBracket = 15,
    LeftParen = 16,
    RightParen = 17,

    // === Assignment ===
    /// `:=`
    Assign = 18,
    /// `->`
    Define = 19,

    // === Punctuation ===
    Comma = 20,
    SemiColon = 21,
    Period = 22,
}

/// Display names, indexed by `Token as usize`.
///
/// Punctuation, grouping and assignment tokens render as their symbol;
/// every other token renders as an uppercase tag.
static NAMES: [&str; Token::COUNT] = [
    "ILLEGAL",
    "EOF",
    "COMMENT",
    "STRING",
    "INT",
    "LOWER_IDENT",
    "UPPER_IDENT",
    "LOWER_KEYWORD",
    "UPPER_KEYWORD",
    "BINARY",
    "ATTR_GET",
    "ATTR_SET",
    "{",
    "}",
    "[",
    "]",
    "(",
    ")",
    ":=",
    "->",
    ",",
    ";",
    ".",
];

impl Token {
    /// Number of token variants.
    pub const COUNT: usize = Self::Period as usize + 1;

    /// Every token, in ordinal order.
    pub const ALL: [Token; Self::COUNT] = [
        Self::Illegal,
        Self::EndOfInput,
        Self::Comment,
        Self::String,
        Self::Integer,
        Self::LowerIdentifier,
        Self::UpperIdentifier,
        Self::LowerKeyword,
        Self::UpperKeyword,
        Self::Binary,
        Self::AttributeGet,
        Self::AttributeSet,
        Self::LeftBrace,
        Self::RightBrace,
        Self::LeftBracket,
        Self::RightBracket,
        Self::LeftParen,
        Self::RightParen,
        Self::Assign,
        Self::Define,
        Self::Comma,
        Self::SemiColon,
        Self::Period,
    ];

    /// Canonical display name.
    ///
    /// For punctuation, grouping and assignment tokens this is the token's
    /// character sequence (`Token::Comma` is `","`). For all other tokens it
    /// is the uppercase tag (`Token::Binary` is `"BINARY"`).
    #[inline]
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
