//! Byte classification predicates shared by the scanner.
//!
//! All predicates are pure functions over single bytes, so they can be called
//! from any number of threads at once without coordination.

/// Lookup table for [`is_identifier_char`]: `true` for ASCII alphanumerics,
/// `_`, and `-`.
static IS_IDENTIFIER_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        let byte = i as u8;
        table[i] = byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-';
        i += 1;
    }
    table
};

/// Returns `true` for the four whitespace bytes skipped between tokens:
/// space, tab, carriage return, and line feed.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Returns `true` if `byte` can continue a number run of the given base.
///
/// Base 10 accepts `0`-`9` and `.` (the point is scanned as part of the run;
/// whether the result is a well-formed number is the decoder's problem).
/// Base 16 accepts `0`-`9` and `a`-`f` in either case but not `.`, which is
/// exactly what terminates a hex run.
#[inline]
pub fn is_digit(byte: u8, hex: bool) -> bool {
    if hex {
        byte.is_ascii_hexdigit()
    } else {
        byte.is_ascii_digit() || byte == b'.'
    }
}

/// Returns `true` for bytes that may appear inside an identifier run:
/// ASCII alphanumerics, `_`, and `-`.
#[inline]
pub fn is_identifier_char(byte: u8) -> bool {
    IS_IDENTIFIER_TABLE[byte as usize]
}
