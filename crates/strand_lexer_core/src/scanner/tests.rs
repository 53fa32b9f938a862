//! Tests for the single-pass scanner.

use pretty_assertions::assert_eq;

use super::{tokenize, Scanner};
use crate::token::{Token, TokenKind};

fn token(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text)
}

/// Scans to completion and keeps only the kinds.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

/// Scans to completion and keeps only the texts.
fn scan_texts(source: &str) -> Vec<String> {
    tokenize(source).into_iter().map(|t| t.text).collect()
}

// ─── End of stream ─────────────────────────────────────────────────────────

#[test]
fn empty_source_returns_end_forever() {
    let mut scanner = Scanner::new("");
    for _ in 0..3 {
        let end = scanner.next_token();
        assert!(end.is_end());
        assert_eq!(end.text, "");
    }
    assert!(scanner.is_completed());
}

#[test]
fn whitespace_only_source_scans_to_end() {
    let mut scanner = Scanner::new(" \t\r\n ");
    assert!(scanner.next_token().is_end());
    assert_eq!(scanner.pos(), 5);
    assert!(scanner.is_completed());
}

// ─── Single-character tokens ───────────────────────────────────────────────

#[test]
fn every_punctuation_byte_maps_to_its_kind() {
    assert_eq!(
        scan_kinds(r#",[]{}()/<>=+*\#.;:'"|"#),
        vec![
            TokenKind::Comma,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::FwdSlash,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
            TokenKind::Equal,
            TokenKind::Plus,
            TokenKind::Star,
            TokenKind::BackSlash,
            TokenKind::Pound,
            TokenKind::Period,
            TokenKind::SemiColon,
            TokenKind::Colon,
            TokenKind::Apostrophe,
            TokenKind::Quote,
            TokenKind::Pipe,
        ]
    );
}

#[test]
fn nul_byte_is_its_own_token() {
    let mut scanner = Scanner::from_bytes(b"a\0b");
    assert_eq!(scanner.next_token(), token(TokenKind::String, "a"));
    assert_eq!(scanner.next_token(), token(TokenKind::NullTerminator, "\0"));
    assert_eq!(scanner.next_token(), token(TokenKind::String, "b"));
    assert!(scanner.next_token().is_end());
}

#[test]
fn unrecognized_bytes_become_unknown_tokens() {
    assert_eq!(
        tokenize("@!"),
        vec![token(TokenKind::Unknown, "@"), token(TokenKind::Unknown, "!")]
    );
}

#[test]
fn non_utf8_bytes_are_replaced_in_the_text() {
    let mut scanner = Scanner::from_bytes(b"\xff");
    let bad = scanner.next_token();
    assert_eq!(bad.kind, TokenKind::Unknown);
    assert_eq!(bad.text, "\u{fffd}");
    assert!(scanner.is_completed());
}

// ─── Identifiers ───────────────────────────────────────────────────────────

#[test]
fn identifier_runs_include_digits_underscore_hyphen() {
    assert_eq!(
        tokenize("value_2-b rest"),
        vec![
            token(TokenKind::String, "value_2-b"),
            token(TokenKind::String, "rest"),
        ]
    );
}

#[test]
fn underscore_starts_an_identifier() {
    assert_eq!(tokenize("_private"), vec![token(TokenKind::String, "_private")]);
}

#[test]
fn identifier_stops_at_punctuation() {
    assert_eq!(
        tokenize("name=value"),
        vec![
            token(TokenKind::String, "name"),
            token(TokenKind::Equal, "="),
            token(TokenKind::String, "value"),
        ]
    );
    assert_eq!(
        tokenize("hello_world,"),
        vec![
            token(TokenKind::String, "hello_world"),
            token(TokenKind::Comma, ","),
        ]
    );
}

// ─── Numbers ───────────────────────────────────────────────────────────────

#[test]
fn decimal_runs() {
    assert_eq!(tokenize("123"), vec![token(TokenKind::Decimal, "123")]);
    assert_eq!(tokenize("-123"), vec![token(TokenKind::Decimal, "-123")]);
    assert_eq!(tokenize("3.25"), vec![token(TokenKind::Decimal, "3.25")]);
}

#[test]
fn multiple_points_stay_in_one_decimal_run() {
    // Well-formedness is the decoder's problem, not the scanner's.
    assert_eq!(tokenize("1.2.3"), vec![token(TokenKind::Decimal, "1.2.3")]);
}

#[test]
fn leading_point_is_a_period_token() {
    assert_eq!(
        tokenize(".5"),
        vec![token(TokenKind::Period, "."), token(TokenKind::Decimal, "5")]
    );
}

#[test]
fn minus_point_scans_as_a_decimal_run() {
    assert_eq!(tokenize("-.5"), vec![token(TokenKind::Decimal, "-.5")]);
}

#[test]
fn hex_tag_upgrades_the_run() {
    assert_eq!(tokenize("0x1A"), vec![token(TokenKind::Hex, "0x1A")]);
}

#[test]
fn hex_tag_alone_is_still_hex() {
    assert_eq!(tokenize("0x"), vec![token(TokenKind::Hex, "0x")]);
}

#[test]
fn negative_hex_keeps_sign_and_tag() {
    assert_eq!(tokenize("-0x1f"), vec![token(TokenKind::Hex, "-0x1f")]);
}

#[test]
fn uppercase_tag_is_not_hex() {
    assert_eq!(
        tokenize("0X1A"),
        vec![token(TokenKind::Decimal, "0"), token(TokenKind::String, "X1A")]
    );
}

#[test]
fn hex_run_stops_at_the_point() {
    assert_eq!(
        tokenize("0x1.5"),
        vec![
            token(TokenKind::Hex, "0x1"),
            token(TokenKind::Period, "."),
            token(TokenKind::Decimal, "5"),
        ]
    );
}

#[test]
fn lone_hyphen_rolls_back() {
    assert_eq!(tokenize("-"), vec![token(TokenKind::Hyphen, "-")]);
    assert_eq!(
        tokenize("- 5"),
        vec![token(TokenKind::Hyphen, "-"), token(TokenKind::Decimal, "5")]
    );
    assert_eq!(
        tokenize("-a"),
        vec![token(TokenKind::Hyphen, "-"), token(TokenKind::String, "a")]
    );
}

#[test]
fn double_hyphen_is_hyphen_then_negative_number() {
    assert_eq!(
        tokenize("--1"),
        vec![token(TokenKind::Hyphen, "-"), token(TokenKind::Decimal, "-1")]
    );
}

#[test]
fn hex_letters_without_a_flag_are_strings() {
    assert_eq!(tokenize("ff"), vec![token(TokenKind::String, "ff")]);
}

// ─── Hex modes ─────────────────────────────────────────────────────────────

#[test]
fn per_call_expect_hex_accepts_letter_starts() {
    let mut scanner = Scanner::new("ff FF gg 10");
    assert_eq!(scanner.next_token_with(true, None), token(TokenKind::Hex, "ff"));
    assert_eq!(scanner.next_token_with(true, None), token(TokenKind::Hex, "FF"));
    // g-z never start numbers, flag or not.
    assert_eq!(
        scanner.next_token_with(true, None),
        token(TokenKind::String, "gg")
    );
    // Digit starts follow the stream-wide flag, which is off here.
    assert_eq!(
        scanner.next_token_with(true, None),
        token(TokenKind::Decimal, "10")
    );
}

#[test]
fn stream_hex_mode_widens_digit_runs() {
    let mut scanner = Scanner::new("17 ff").with_hex_mode(true);
    assert_eq!(scanner.next_token(), token(TokenKind::Hex, "17"));
    // The stream flag does not reroute letter starts.
    assert_eq!(scanner.next_token(), token(TokenKind::String, "ff"));
}

#[test]
fn stream_hex_mode_reads_past_letter_digits() {
    let mut scanner = Scanner::new("1f2a,").with_hex_mode(true);
    assert_eq!(scanner.next_token(), token(TokenKind::Hex, "1f2a"));
    assert_eq!(scanner.next_token(), token(TokenKind::Comma, ","));
}

#[test]
fn stream_hex_mode_does_not_consume_the_tag() {
    // With the class already widened, tag detection is skipped and the `x`
    // terminates the run.
    let mut scanner = Scanner::new("0x17").with_hex_mode(true);
    assert_eq!(scanner.next_token(), token(TokenKind::Hex, "0"));
    assert_eq!(scanner.next_token(), token(TokenKind::String, "x17"));
}

#[test]
fn hyphen_rollback_uses_decimal_class_even_in_hex_mode() {
    let mut scanner = Scanner::new("-f").with_hex_mode(true);
    assert_eq!(scanner.next_token(), token(TokenKind::Hyphen, "-"));
    assert_eq!(scanner.next_token(), token(TokenKind::String, "f"));
}

// ─── Whitespace ────────────────────────────────────────────────────────────

#[test]
fn whitespace_is_skipped_and_excluded_from_text() {
    assert_eq!(scan_texts(" a\t1 ,"), vec!["a", "1", ","]);
    assert_eq!(
        scan_kinds(" a\t1 ,"),
        vec![TokenKind::String, TokenKind::Decimal, TokenKind::Comma]
    );
}

// ─── Bounded reads ─────────────────────────────────────────────────────────

#[test]
fn bounded_read_takes_up_to_count_bytes() {
    let mut scanner = Scanner::new("abcdef");
    assert_eq!(
        scanner.next_token_with(false, Some(3)),
        token(TokenKind::String, "abc")
    );
    assert_eq!(scanner.pos(), 3);
}

#[test]
fn bounded_read_ignores_byte_classes() {
    let mut scanner = Scanner::new("a b,c");
    assert_eq!(
        scanner.next_token_with(false, Some(4)),
        token(TokenKind::String, "a b,")
    );
}

#[test]
fn bounded_read_skips_leading_whitespace_only() {
    let mut scanner = Scanner::new("  xyz");
    assert_eq!(
        scanner.next_token_with(false, Some(2)),
        token(TokenKind::String, "xy")
    );
}

#[test]
fn bounded_read_clamps_at_the_end() {
    let mut scanner = Scanner::new("ab");
    assert_eq!(
        scanner.next_token_with(false, Some(10)),
        token(TokenKind::String, "ab")
    );
    assert!(scanner.is_completed());
}

#[test]
fn bounded_read_of_zero_does_not_move() {
    let mut scanner = Scanner::new("  ab");
    assert_eq!(
        scanner.next_token_with(false, Some(0)),
        token(TokenKind::String, "")
    );
    assert_eq!(scanner.pos(), 0, "not even the whitespace skip runs");
}

#[test]
fn bounded_read_at_the_end_returns_an_empty_string_not_end() {
    let mut scanner = Scanner::new("a");
    scanner.next_token();
    let empty = scanner.next_token_with(false, Some(3));
    assert_eq!(empty.kind, TokenKind::String);
    assert_eq!(empty.text, "");
}

// ─── Delimited reads ───────────────────────────────────────────────────────

#[test]
fn read_to_stops_before_the_delimiter() {
    let mut scanner = Scanner::new("abc;def");
    assert_eq!(scanner.read_to(b';'), token(TokenKind::String, "abc"));
    assert_eq!(scanner.next_token(), token(TokenKind::SemiColon, ";"));
}

#[test]
fn read_to_consumes_a_leading_delimiter() {
    let mut scanner = Scanner::new(";abc;x");
    assert_eq!(scanner.read_to(b';'), token(TokenKind::String, ";abc"));
    assert_eq!(scanner.pos(), 4);
}

#[test]
fn read_to_skips_leading_whitespace() {
    let mut scanner = Scanner::new("  abc;def");
    assert_eq!(scanner.read_to(b';'), token(TokenKind::String, "abc"));
    assert_eq!(scanner.next_token(), token(TokenKind::SemiColon, ";"));
}

#[test]
fn read_to_runs_to_the_end_when_absent() {
    let mut scanner = Scanner::new("abc");
    assert_eq!(scanner.read_to(b';'), token(TokenKind::String, "abc"));
    assert!(scanner.is_completed());
}

#[test]
fn read_to_at_the_end_is_an_empty_string() {
    let mut scanner = Scanner::new("");
    assert_eq!(scanner.read_to(b';'), token(TokenKind::String, ""));
}

#[test]
fn read_to_on_a_lone_delimiter_consumes_it() {
    let mut scanner = Scanner::new(";");
    assert_eq!(scanner.read_to(b';'), token(TokenKind::String, ";"));
    assert!(scanner.is_completed());
}

// ─── Stream queries ────────────────────────────────────────────────────────

#[test]
fn progress_moves_from_zero_to_one() {
    let mut scanner = Scanner::new("abcd");
    assert_eq!(scanner.progress(), 0.0);
    scanner.next_token_with(false, Some(2));
    assert_eq!(scanner.progress(), 0.5);
    scanner.next_token();
    assert_eq!(scanner.progress(), 1.0);
}

#[test]
fn progress_of_an_empty_buffer_is_one() {
    assert_eq!(Scanner::new("").progress(), 1.0);
}

#[test]
fn checkpoint_and_restore_rescan_the_same_tokens() {
    let mut scanner = Scanner::new("one two");
    assert_eq!(scanner.next_token(), token(TokenKind::String, "one"));
    let saved = scanner.checkpoint();
    assert_eq!(scanner.next_token(), token(TokenKind::String, "two"));
    scanner.restore(saved);
    assert_eq!(scanner.next_token(), token(TokenKind::String, "two"));
}

// ─── Iteration ─────────────────────────────────────────────────────────────

#[test]
fn iterator_stops_at_the_end_marker() {
    let tokens: Vec<Token> = Scanner::new("a,b").collect();
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| !t.is_end()));
}

#[test]
fn tokenize_collects_everything_but_end() {
    assert_eq!(
        tokenize("x = 0x1A;"),
        vec![
            token(TokenKind::String, "x"),
            token(TokenKind::Equal, "="),
            token(TokenKind::Hex, "0x1A"),
            token(TokenKind::SemiColon, ";"),
        ]
    );
}

// ─── Coverage ──────────────────────────────────────────────────────────────

#[test]
fn consumed_spans_partition_the_source() {
    let sources = [
        "name = value; flags [0x1F, -2, 3.5];",
        "  leading and trailing  ",
        "--1 -.5 0X1A x",
        "#comment | 'quoted' \"q\" <a-b>",
    ];
    for source in sources {
        let mut scanner = Scanner::new(source);
        let mut prev = scanner.pos();
        loop {
            let next = scanner.next_token();
            if next.is_end() {
                break;
            }
            let delta = scanner.pos() - prev;
            assert!(delta >= 1, "{source:?}: every token makes progress");
            assert!(
                delta >= next.text.len(),
                "{source:?}: the consumed span covers the text"
            );
            prev = scanner.pos();
        }
        assert_eq!(scanner.pos(), source.len(), "{source:?}");
        assert!(scanner.is_completed());
    }
}

mod properties {
    use proptest::prelude::*;

    use super::Scanner;

    proptest! {
        #[test]
        fn scanning_consumes_every_byte(
            source in prop::collection::vec(any::<u8>(), 0..128),
            hex_mode in any::<bool>(),
        ) {
            let mut scanner = Scanner::from_bytes(&source).with_hex_mode(hex_mode);
            let mut count = 0usize;
            loop {
                let before = scanner.pos();
                let next = scanner.next_token();
                if next.is_end() {
                    break;
                }
                prop_assert!(scanner.pos() > before, "every token consumes at least one byte");
                count += 1;
                prop_assert!(count <= source.len());
            }
            prop_assert_eq!(scanner.pos(), source.len());
            prop_assert!(scanner.is_completed());
        }

        #[test]
        fn end_is_sticky(source in prop::collection::vec(any::<u8>(), 0..32)) {
            let mut scanner = Scanner::from_bytes(&source);
            while !scanner.next_token().is_end() {}
            for _ in 0..3 {
                let end = scanner.next_token();
                prop_assert!(end.is_end());
                prop_assert_eq!(end.text.as_str(), "");
            }
        }
    }
}
