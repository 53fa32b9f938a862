//! Single-pass scanner from bytes to tokens.
//!
//! The scanner makes one pass over the buffer with at most two bytes of
//! lookahead. Dispatch is a flat match on the current byte: digits and `-`
//! go to the number path, letters and `_` to the identifier path, everything
//! else is a single-byte token. Unrecognized bytes become `Unknown` tokens,
//! so every call makes forward progress and no input can wedge the scanner.
//!
//! Two scan modes bend the dispatch without changing its shape:
//!
//! * hex mode (per stream via [`Scanner::with_hex_mode`], or per call via
//!   [`Scanner::next_token_with`]) widens digit classification to base 16,
//! * a fixed length turns the call into a bounded raw read that ignores
//!   byte classes entirely.

use crate::classify;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Streaming tokenizer over a borrowed buffer.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// When set, digit-started runs scan as hex for the whole stream.
    hex_mode: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over a string buffer.
    pub fn new(source: &'a str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Creates a scanner over raw bytes. Spans that are not valid UTF-8
    /// come out with `U+FFFD` replacements in the token text.
    pub fn from_bytes(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
            hex_mode: false,
        }
    }

    /// Scans every digit-started number run as hex for the whole stream.
    ///
    /// The flag widens the digit class for runs the dispatch already routed
    /// to the number path; it does not make letter-started input numeric.
    /// `"ff"` stays a string even in hex mode, while `"17"` becomes a hex
    /// token worth 23.
    #[must_use]
    pub fn with_hex_mode(mut self, enabled: bool) -> Self {
        self.hex_mode = enabled;
        self
    }

    /// Scans the next token with default settings.
    ///
    /// Equivalent to `next_token_with(false, None)`.
    pub fn next_token(&mut self) -> Token {
        self.next_token_with(false, None)
    }

    /// Scans the next token.
    ///
    /// `expect_hex` lets this one call accept `a`-`f` and `A`-`F` as number
    /// starts, for callers that know a hex value comes next; digit-started
    /// runs keep following the stream-wide hex flag. `fixed_length` switches
    /// the call to a bounded raw read of up to that many bytes, ignoring
    /// byte classes; the result is then always a `String` token (empty when
    /// the stream is exhausted), never `End`.
    pub fn next_token_with(&mut self, expect_hex: bool, fixed_length: Option<usize>) -> Token {
        if let Some(count) = fixed_length {
            return self.bounded(count);
        }

        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        let Some(byte) = self.cursor.current() else {
            return Token::end();
        };

        match byte {
            b'-' | b'0'..=b'9' => self.number(start, self.hex_mode),
            b'a'..=b'f' | b'A'..=b'F' if expect_hex => self.number(start, true),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b',' => self.single(start, TokenKind::Comma),
            b'[' => self.single(start, TokenKind::LeftBracket),
            b']' => self.single(start, TokenKind::RightBracket),
            b'{' => self.single(start, TokenKind::LeftBrace),
            b'}' => self.single(start, TokenKind::RightBrace),
            b'(' => self.single(start, TokenKind::LeftParen),
            b')' => self.single(start, TokenKind::RightParen),
            b'/' => self.single(start, TokenKind::FwdSlash),
            b'<' => self.single(start, TokenKind::LessThan),
            b'>' => self.single(start, TokenKind::GreaterThan),
            b'=' => self.single(start, TokenKind::Equal),
            b'+' => self.single(start, TokenKind::Plus),
            b'*' => self.single(start, TokenKind::Star),
            b'\\' => self.single(start, TokenKind::BackSlash),
            b'#' => self.single(start, TokenKind::Pound),
            b'.' => self.single(start, TokenKind::Period),
            b';' => self.single(start, TokenKind::SemiColon),
            b':' => self.single(start, TokenKind::Colon),
            b'\'' => self.single(start, TokenKind::Apostrophe),
            b'"' => self.single(start, TokenKind::Quote),
            b'|' => self.single(start, TokenKind::Pipe),
            0 => self.single(start, TokenKind::NullTerminator),
            _ => self.single(start, TokenKind::Unknown),
        }
    }

    /// Skips whitespace, then consumes up to (but not including) the next
    /// occurrence of `delimiter`.
    ///
    /// The first byte after the skip is consumed unconditionally, so a
    /// leading delimiter is swallowed rather than producing an empty token;
    /// every later occurrence stops the read and stays in the stream. At an
    /// exhausted stream the result is an empty `String` token.
    pub fn read_to(&mut self, delimiter: u8) -> Token {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        if !self.cursor.is_completed() {
            self.cursor.advance();
            self.cursor.eat_until(delimiter);
        }
        self.token_from(TokenKind::String, start)
    }

    /// A copy of the cursor for a later [`Scanner::restore`].
    pub fn checkpoint(&self) -> Cursor<'a> {
        self.cursor
    }

    /// Rewinds the scanner to a previously taken checkpoint.
    pub fn restore(&mut self, saved: Cursor<'a>) {
        debug_assert!(
            std::ptr::eq(self.cursor.source().as_ptr(), saved.source().as_ptr()),
            "checkpoint must come from this scanner's buffer"
        );
        self.cursor = saved;
    }

    /// Byte offset of the next unconsumed byte.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Total buffer length in bytes.
    pub fn source_len(&self) -> usize {
        self.cursor.source_len()
    }

    /// `true` once the whole buffer has been consumed.
    pub fn is_completed(&self) -> bool {
        self.cursor.is_completed()
    }

    /// Fraction of the buffer consumed so far, in `0.0..=1.0`.
    ///
    /// An empty buffer reports `1.0`: there is nothing left to scan.
    #[allow(
        clippy::cast_precision_loss,
        reason = "progress is a coarse indicator; f32 precision is plenty"
    )]
    pub fn progress(&self) -> f32 {
        if self.cursor.source_len() == 0 {
            return 1.0;
        }
        self.cursor.pos() as f32 / self.cursor.source_len() as f32
    }

    // ─── Scan paths ────────────────────────────────────────────────────────

    /// Scans a number run starting at the current byte (a digit or `-`).
    ///
    /// A `-` not followed by a byte of the decimal digit class rolls the
    /// cursor back and comes out as `Hyphen`. A `0x` tag right after the
    /// optional sign upgrades the run to hex and is kept in the text. A `.`
    /// extends decimal runs and terminates hex runs.
    fn number(&mut self, start: usize, forced_hex: bool) -> Token {
        let checkpoint = self.cursor;
        let first = self.cursor.current();
        self.cursor.advance(); // consume the sign or first digit

        let negative = first == Some(b'-');
        if negative {
            // The follow byte decides between a number and a bare hyphen.
            // The check is always against the decimal class, so `-f` is a
            // hyphen then a string even when scanning hex.
            let follows = self.cursor.current();
            if !follows.is_some_and(|byte| classify::is_digit(byte, false)) {
                self.cursor = checkpoint;
                return self.single(start, TokenKind::Hyphen);
            }
        }

        let mut kind = TokenKind::Decimal;
        if forced_hex {
            kind = TokenKind::Hex;
        } else {
            // Only the lowercase tag counts; "0X1A" scans as a decimal zero
            // followed by a string.
            let tagged = if negative {
                self.cursor.current() == Some(b'0') && self.cursor.peek() == Some(b'x')
            } else {
                first == Some(b'0') && self.cursor.current() == Some(b'x')
            };
            if tagged {
                kind = TokenKind::Hex;
                self.cursor.advance_n(if negative { 2 } else { 1 });
            }
        }

        while self
            .cursor
            .current()
            .is_some_and(|byte| classify::is_digit(byte, kind == TokenKind::Hex))
        {
            self.cursor.advance();
        }

        self.token_from(kind, start)
    }

    /// Scans an identifier run starting at the current byte.
    fn identifier(&mut self, start: usize) -> Token {
        self.cursor.advance(); // consume the first letter or '_'
        self.cursor.eat_while(classify::is_identifier_char);
        self.token_from(TokenKind::String, start)
    }

    /// Consumes one byte and produces a single-character token.
    fn single(&mut self, start: usize, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token_from(kind, start)
    }

    /// Reads up to `count` bytes after skipping whitespace, ignoring byte
    /// classes. A count of zero returns an empty token without touching the
    /// cursor, not even for the whitespace skip.
    fn bounded(&mut self, count: usize) -> Token {
        if count == 0 {
            return Token::new(TokenKind::String, "");
        }
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        let take = count.min(self.cursor.remaining());
        self.cursor.advance_n(take);
        self.token_from(TokenKind::String, start)
    }

    /// Builds a token whose text is the bytes consumed since `start`.
    fn token_from(&self, kind: TokenKind, start: usize) -> Token {
        let text = String::from_utf8_lossy(self.cursor.slice_from(start)).into_owned();
        Token::new(kind, text)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields tokens until the stream is exhausted. The `End` marker itself
    /// is not yielded; the iterator just stops.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}

/// Scans `source` to completion and collects every token except the final
/// `End` marker.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
