//! Decoding scanned number tokens into machine values.
//!
//! All decoders are tolerant: malformed or out-of-range text is a `None`,
//! never a panic and never a silently truncated value. They look only at the
//! token text; the kind is the caller's concern. The text preparation
//! mirrors how the scanner builds number runs:
//!
//! * unsigned decoders strip a leading `-` and decode the magnitude,
//! * hex decoders strip the `0x` tag the scanner kept in the text,
//! * binary decoders recognize no `0b` convention; `"101"` is five.
//!
//! Everything here is stateless and takes tokens by reference, so decoding
//! can run on any thread.

use std::borrow::Cow;

use strand_lexer_core::Token;

/// Number base for the integer decoders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    /// Base 10.
    Decimal,
    /// Base 16; a leading `0x` (after the sign) is stripped before decoding.
    Hex,
    /// Base 2; no prefix convention is recognized.
    Binary,
}

impl Radix {
    fn base(self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Hex => 16,
            Self::Binary => 2,
        }
    }
}

/// Token text with the sign stripped, for the unsigned decoders.
fn unsigned_text(text: &str, radix: Radix) -> &str {
    let magnitude = text.strip_prefix('-').unwrap_or(text);
    if radix == Radix::Hex {
        magnitude.strip_prefix("0x").unwrap_or(magnitude)
    } else {
        magnitude
    }
}

/// Token text with the hex tag stripped but the sign kept, for the signed
/// decoders.
fn signed_text(text: &str, radix: Radix) -> Cow<'_, str> {
    if radix != Radix::Hex {
        return Cow::Borrowed(text);
    }
    if let Some(rest) = text.strip_prefix("-0x") {
        return Cow::Owned(format!("-{rest}"));
    }
    match text.strip_prefix("0x") {
        Some(rest) => Cow::Borrowed(rest),
        None => Cow::Borrowed(text),
    }
}

/// Decodes `token` as an unsigned 32-bit integer. A leading `-` is stripped
/// first, so `"-5"` decodes to `5`.
pub fn parse_u32(token: &Token, radix: Radix) -> Option<u32> {
    u32::from_str_radix(unsigned_text(&token.text, radix), radix.base()).ok()
}

/// Decodes `token` as an unsigned 64-bit integer; see [`parse_u32`] for the
/// sign handling.
pub fn parse_u64(token: &Token, radix: Radix) -> Option<u64> {
    u64::from_str_radix(unsigned_text(&token.text, radix), radix.base()).ok()
}

/// Decodes `token` as a signed 32-bit integer. For hex the sign survives
/// the tag strip: `"-0x1F"` decodes to `-31`.
pub fn parse_i32(token: &Token, radix: Radix) -> Option<i32> {
    i32::from_str_radix(&signed_text(&token.text, radix), radix.base()).ok()
}

/// Decodes `token` as a signed 64-bit integer; see [`parse_i32`] for the
/// sign handling.
pub fn parse_i64(token: &Token, radix: Radix) -> Option<i64> {
    i64::from_str_radix(&signed_text(&token.text, radix), radix.base()).ok()
}

/// Decodes `token` as a 32-bit float. Decimal runs can carry more than one
/// point; those fail here rather than guessing at a value.
pub fn parse_f32(token: &Token) -> Option<f32> {
    token.text.parse().ok()
}

/// Decodes `token` as a 64-bit float; see [`parse_f32`].
pub fn parse_f64(token: &Token) -> Option<f64> {
    token.text.parse().ok()
}

/// Position of `token`'s text in `candidates`, or `candidates.len()` when
/// absent. The length sentinel keeps the return type a plain index; callers
/// building jump tables branch on `== candidates.len()` for the miss arm.
pub fn token_set_index(token: &Token, candidates: &[&str]) -> usize {
    candidates
        .iter()
        .position(|candidate| token.text == *candidate)
        .unwrap_or(candidates.len())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
