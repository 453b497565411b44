use super::*;
use std::borrow::Cow;

use pretty_assertions::assert_eq;

fn cursor(src: &str) -> Cursor<'_> {
    Cursor::new(src.as_bytes(), SourceFile::new("", src.len()))
}

fn bytes_cursor(src: &[u8]) -> Cursor<'_> {
    Cursor::new(src, SourceFile::new("", src.len()))
}

/// Bump until end of input, collecting `(offset, char)` pairs.
fn walk(c: &mut Cursor<'_>) -> Vec<(usize, char)> {
    let mut out = Vec::new();
    let _ = c.bump();
    while let Some(ch) = c.current() {
        out.push((c.offset(), ch));
        let _ = c.bump();
    }
    out
}

// === Basic Navigation ===

#[test]
fn starts_before_first_character() {
    let c = cursor("abc");
    assert_eq!(c.current(), Some(' '));
    assert_eq!(c.offset(), 0);
}

#[test]
fn bump_reads_first_character() {
    let mut c = cursor("abc");
    assert_eq!(c.bump(), None);
    assert_eq!(c.current(), Some('a'));
    assert_eq!(c.offset(), 0);
}

#[test]
fn bump_through_entire_source() {
    let mut c = cursor("hi");
    assert_eq!(walk(&mut c), vec![(0, 'h'), (1, 'i')]);
    assert_eq!(c.current(), None);
    assert_eq!(c.offset(), 2);
}

#[test]
fn bump_at_end_stays_at_end() {
    let mut c = cursor("x");
    let _ = walk(&mut c);
    assert_eq!(c.bump(), None);
    assert_eq!(c.bump(), None);
    assert_eq!(c.current(), None);
    assert_eq!(c.offset(), 1);
}

#[test]
fn empty_source_is_end_of_input() {
    let mut c = cursor("");
    assert_eq!(c.bump(), None);
    assert_eq!(c.current(), None);
    assert_eq!(c.offset(), 0);
}

// === UTF-8 ===

#[test]
fn bump_decodes_multibyte() {
    let mut c = cursor("aλ\u{1F600}b");
    assert_eq!(
        walk(&mut c),
        vec![(0, 'a'), (1, 'λ'), (3, '\u{1F600}'), (7, 'b')]
    );
}

#[test]
fn invalid_utf8_consumes_one_byte() {
    let mut c = bytes_cursor(b"a\xffb");
    let _ = c.bump();
    let issue = c.bump();
    assert_eq!(
        issue,
        Some(EncodingIssue {
            kind: EncodingIssueKind::InvalidUtf8,
            offset: 1,
        })
    );
    assert_eq!(c.current(), Some(char::REPLACEMENT_CHARACTER));
    assert!(c.is_malformed());
    assert_eq!(c.bump(), None);
    assert_eq!(c.current(), Some('b'));
    assert_eq!(c.offset(), 2);
    assert!(!c.is_malformed());
}

#[test]
fn truncated_sequence_is_invalid() {
    // First two bytes of a three-byte sequence.
    let mut c = bytes_cursor(b"\xe2\x82");
    let issue = c.bump();
    assert_eq!(issue.map(|i| i.kind), Some(EncodingIssueKind::InvalidUtf8));
    let issue = c.bump();
    assert_eq!(issue.map(|i| i.offset), Some(1));
    assert_eq!(c.bump(), None);
    assert_eq!(c.current(), None);
}

#[test]
fn nul_byte_is_reported_and_decoded() {
    let mut c = cursor("a\0b");
    let _ = c.bump();
    let issue = c.bump();
    assert_eq!(
        issue,
        Some(EncodingIssue {
            kind: EncodingIssueKind::Nul,
            offset: 1,
        })
    );
    assert_eq!(c.current(), Some('\0'));
    let _ = c.bump();
    assert_eq!(c.current(), Some('b'));
}

// === Line Bookkeeping ===

#[test]
fn newline_opens_line_on_next_bump() {
    let mut c = cursor("a\nb\nc");
    let _ = walk(&mut c);
    assert_eq!(c.file().lines(), &[0, 2, 4]);
}

#[test]
fn trailing_newline_does_not_open_line() {
    let mut c = cursor("a\n");
    let _ = walk(&mut c);
    assert_eq!(c.file().lines(), &[0]);
    assert_eq!(c.line_offset(), 2);
}

#[test]
fn line_offset_tracks_current_line() {
    let mut c = cursor("ab\ncd");
    let _ = c.bump();
    assert_eq!(c.line_offset(), 0);
    while c.current() != Some('d') {
        let _ = c.bump();
    }
    assert_eq!(c.line_offset(), 3);
}

// === ASCII Identifier Fast Path ===

#[test]
fn eat_ascii_ident_stops_on_ascii() {
    let mut c = cursor("hello world");
    let _ = c.bump();
    assert!(c.eat_ascii_ident());
    assert_eq!(c.current(), Some(' '));
    assert_eq!(c.offset(), 5);
    assert_eq!(c.slice(0, c.offset()), "hello");
}

#[test]
fn eat_ascii_ident_runs_to_end() {
    let mut c = cursor("abc_123");
    let _ = c.bump();
    assert!(c.eat_ascii_ident());
    assert_eq!(c.current(), None);
    assert_eq!(c.offset(), 7);
}

#[test]
fn eat_ascii_ident_hands_off_on_non_ascii() {
    let mut c = cursor("abcé");
    let _ = c.bump();
    assert!(!c.eat_ascii_ident());
    assert_eq!(c.bump(), None);
    assert_eq!(c.current(), Some('é'));
    assert_eq!(c.offset(), 3);
}

#[test]
fn eat_ascii_ident_hands_off_on_nul() {
    let mut c = cursor("ab\0");
    let _ = c.bump();
    assert!(!c.eat_ascii_ident());
    assert_eq!(c.bump().map(|i| i.kind), Some(EncodingIssueKind::Nul));
}

#[test]
fn eat_ascii_ident_keeps_newline_for_bookkeeping() {
    let mut c = cursor("ab\ncd");
    let _ = c.bump();
    assert!(c.eat_ascii_ident());
    assert_eq!(c.current(), Some('\n'));
    let _ = c.bump();
    assert_eq!(c.file().lines(), &[0, 3]);
}

// === Quoted Body Fast Path ===

#[test]
fn bump_skipping_plain_jumps_to_delimiter() {
    let mut c = cursor("'some comment' x");
    let _ = c.bump(); // '\''
    let _ = c.bump(); // 's'
    assert_eq!(c.bump_skipping_plain(b'\''), None);
    assert_eq!(c.current(), Some('\''));
    assert_eq!(c.offset(), 13);
}

#[test]
fn bump_skipping_plain_stops_at_newline() {
    let mut c = cursor("'ab\ncd'");
    let _ = c.bump();
    let _ = c.bump();
    let _ = c.bump_skipping_plain(b'\'');
    assert_eq!(c.current(), Some('\n'));
    assert_eq!(c.offset(), 3);
    let _ = c.bump_skipping_plain(b'\'');
    assert_eq!(c.current(), Some('c'));
    assert_eq!(c.file().lines(), &[0, 4]);
}

#[test]
fn bump_skipping_plain_stops_at_non_ascii() {
    let mut c = cursor("\"abλd\"");
    let _ = c.bump();
    let _ = c.bump();
    let _ = c.bump_skipping_plain(b'"');
    assert_eq!(c.current(), Some('λ'));
    assert_eq!(c.offset(), 3);
}

#[test]
fn bump_skipping_plain_reports_nul() {
    let mut c = cursor("'a\0'");
    let _ = c.bump();
    let _ = c.bump();
    let issue = c.bump_skipping_plain(b'\'');
    assert_eq!(
        issue,
        Some(EncodingIssue {
            kind: EncodingIssueKind::Nul,
            offset: 2,
        })
    );
}

#[test]
fn bump_skipping_plain_reaches_end() {
    let mut c = cursor("'abc");
    let _ = c.bump();
    let _ = c.bump();
    let _ = c.bump_skipping_plain(b'\'');
    assert_eq!(c.current(), None);
    assert_eq!(c.offset(), 4);
}

// === Slice ===

#[test]
fn slice_borrows_valid_text() {
    let c = cursor("hi λ bye");
    assert!(matches!(c.slice(0, 2), Cow::Borrowed("hi")));
    assert_eq!(c.slice(3, 5), "λ");
    assert_eq!(c.slice(2, 2), "");
}

#[test]
fn slice_replaces_invalid_bytes() {
    let c = bytes_cursor(b"a\xffb");
    assert_eq!(c.slice(1, 2), "\u{FFFD}");
}

// === Decoding helper ===

#[test]
fn decode_utf8_widths() {
    assert_eq!(decode_utf8("é".as_bytes()), Some(('é', 2)));
    assert_eq!(decode_utf8("€x".as_bytes()), Some(('€', 3)));
    assert_eq!(decode_utf8("\u{1F600}".as_bytes()), Some(('\u{1F600}', 4)));
    assert_eq!(decode_utf8(b"\xff"), None);
    assert_eq!(decode_utf8(b"\xc3"), None);
}
