//! Backtracking reader over the single-pass scanner.

use strand_lexer_core::{Cursor, Scanner, Token, TokenKind};
use tracing::trace;

/// A token reader with speculative operations.
///
/// All `expect_*` calls are transactional: on a match the stream moves past
/// the matched token, on a miss the cursor is restored to where it was
/// before the call, whitespace skip included. There is no error type here;
/// "not what you expected" is a `None` and the stream is left untouched for
/// the caller's next attempt.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over a string buffer.
    pub fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
        }
    }

    /// Creates a lexer over raw bytes.
    pub fn from_bytes(source: &'a [u8]) -> Self {
        Self {
            scanner: Scanner::from_bytes(source),
        }
    }

    /// Scans every digit-started number run as hex for the whole stream.
    #[must_use]
    pub fn with_hex_mode(mut self, enabled: bool) -> Self {
        self.scanner = self.scanner.with_hex_mode(enabled);
        self
    }

    /// Scans and consumes the next token.
    pub fn next_token(&mut self) -> Token {
        self.scanner.next_token()
    }

    /// Scans and consumes the next token with explicit scan settings; see
    /// [`Scanner::next_token_with`].
    pub fn next_token_with(&mut self, expect_hex: bool, fixed_length: Option<usize>) -> Token {
        self.scanner.next_token_with(expect_hex, fixed_length)
    }

    /// Consumes exactly `expected` if the stream continues with it.
    ///
    /// The comparison runs over a bounded raw read of `expected.len()`
    /// bytes, so token boundaries do not matter: `expect_string("[[")`
    /// matches two brackets at once. On a miss the cursor is restored and
    /// `None` comes back.
    pub fn expect_string(&mut self, expected: &str) -> Option<Token> {
        let saved = self.scanner.checkpoint();
        let token = self.scanner.next_token_with(false, Some(expected.len()));
        if token.text == expected {
            trace!(pos = self.scanner.pos(), expected, "expect_string matched");
            Some(token)
        } else {
            self.scanner.restore(saved);
            trace!(
                pos = self.scanner.pos(),
                expected,
                found = %token.text,
                "expect_string missed"
            );
            None
        }
    }

    /// Consumes the next token if it has the expected kind.
    ///
    /// Expecting [`TokenKind::Hex`] widens this call's scan so bare hex
    /// digits (`"ff"`) can match. On a miss the cursor is restored and
    /// `None` comes back.
    pub fn expect_type(&mut self, expected: TokenKind) -> Option<Token> {
        let saved = self.scanner.checkpoint();
        let token = self.scanner.next_token_with(expected == TokenKind::Hex, None);
        if token.kind == expected {
            trace!(
                pos = self.scanner.pos(),
                kind = expected.name(),
                "expect_type matched"
            );
            Some(token)
        } else {
            self.scanner.restore(saved);
            trace!(
                pos = self.scanner.pos(),
                expected = expected.name(),
                found = token.kind.name(),
                "expect_type missed"
            );
            None
        }
    }

    /// Scans the next token without consuming it.
    ///
    /// Returns the full token, so callers can see an upcoming `End` (or an
    /// empty string) rather than guessing from a failed expectation.
    pub fn peek(&mut self) -> Token {
        let saved = self.scanner.checkpoint();
        let token = self.scanner.next_token();
        self.scanner.restore(saved);
        token
    }

    /// Reads up to `count` bytes as a raw `String` token, ignoring byte
    /// classes. Zero reads nothing and does not move the cursor.
    pub fn read(&mut self, count: usize) -> Token {
        self.scanner.next_token_with(false, Some(count))
    }

    /// Reads up to the next occurrence of `delimiter`; see
    /// [`Scanner::read_to`] for the exact consumption rules.
    pub fn read_to(&mut self, delimiter: u8) -> Token {
        self.scanner.read_to(delimiter)
    }

    /// A copy of the cursor for a later [`Lexer::restore`].
    pub fn checkpoint(&self) -> Cursor<'a> {
        self.scanner.checkpoint()
    }

    /// Rewinds to a previously taken checkpoint.
    pub fn restore(&mut self, saved: Cursor<'a>) {
        self.scanner.restore(saved);
    }

    /// Byte offset of the next unconsumed byte.
    pub fn pos(&self) -> usize {
        self.scanner.pos()
    }

    /// `true` once the whole buffer has been consumed.
    pub fn is_completed(&self) -> bool {
        self.scanner.is_completed()
    }

    /// Fraction of the buffer consumed so far, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        self.scanner.progress()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens until the stream is exhausted; the `End` marker itself
    /// is not yielded.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
