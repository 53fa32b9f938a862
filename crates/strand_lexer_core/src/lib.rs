//! Low-level tokenizer for strand.
//!
//! Turns a flat byte or string buffer into typed lexical tokens: numbers in
//! three bases, bare identifier runs, single-character punctuation, and an
//! end-of-stream marker. The scanner is error-tolerant by construction --
//! unrecognized input becomes [`TokenKind::Unknown`] tokens and the stream
//! always makes forward progress, so no input can make it fail or loop.
//!
//! The crate is standalone (no strand_* dependencies) so downstream parsers
//! and tools can embed it without pulling in the reader or diagnostic layers.
//! Speculative reads, raw bounded reads, and numeric decoding live one level
//! up in `strand_lexer`.

pub mod classify;
mod cursor;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenKind};
