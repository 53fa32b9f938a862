//! Byte-level cursor over a borrowed source buffer.
//!
//! [`Cursor`] is the only type that touches raw buffer positions. It borrows
//! the caller's bytes (never copies them) and every advance operation is
//! range-checked, so the position invariant `pos <= source_len` holds no
//! matter what sequence of calls a scanner makes. Completion is a derived
//! property: the stream is done exactly when the position has reached the
//! buffer length.
//!
//! The type is `Copy` on purpose. Speculative readers checkpoint by copying
//! the cursor and restore by assigning the copy back, which keeps
//! backtracking free of heap traffic.

use memchr::memchr;

use crate::classify;

/// A range-checked cursor over a borrowed byte buffer.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The underlying bytes, borrowed for the lifetime of the scan.
    source: &'a [u8],
    /// Current byte offset. Invariant: `pos <= source.len()`.
    pos: usize,
}

// Cursors are copied on every checkpoint, so keep them register-sized.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self { source, pos: 0 }
    }

    /// The byte under the cursor, or `None` once the stream is completed.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    /// The byte one past the cursor, without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.pos + 1).copied()
    }

    /// Advances one byte. Saturates at the end of the buffer.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source.len() {
            self.pos += 1;
        }
    }

    /// Advances up to `count` bytes, stopping at the end of the buffer.
    #[inline]
    pub fn advance_n(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.source.len());
    }

    /// Advances while `pred` holds for the current byte.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(byte) = self.current() {
            if !pred(byte) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skips the inter-token whitespace bytes: space, tab, `\r`, and `\n`.
    pub fn eat_whitespace(&mut self) {
        self.eat_while(classify::is_whitespace);
    }

    /// Advances until `byte` is found or the buffer is exhausted, returning
    /// the number of bytes consumed. The cursor lands on the match itself,
    /// so the delimiter is left unconsumed.
    pub fn eat_until(&mut self, byte: u8) -> usize {
        let consumed = match memchr(byte, &self.source[self.pos..]) {
            Some(offset) => offset,
            None => self.source.len() - self.pos,
        };
        self.pos += consumed;
        consumed
    }

    /// Current byte offset into the buffer.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.source.len() - self.pos
    }

    /// `true` once every byte has been consumed. The position can never
    /// exceed the length, so "past the end" and "at the end" coincide.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The bytes from `start` up to the current position. `start` must be a
    /// position previously obtained from [`Cursor::pos`].
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.source[start..self.pos]
    }

    /// The underlying buffer, used to check that a restored checkpoint came
    /// from the same scan.
    pub(crate) fn source(&self) -> &'a [u8] {
        self.source
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
