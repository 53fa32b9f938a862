//! Token reading with backtracking, raw reads, and numeric decoding.
//!
//! [`Lexer`] wraps the single-pass scanner from `strand_lexer_core` with the
//! speculative operations a parser actually leans on: expect a literal or a
//! token kind and stay put when it is not there, peek without consuming, and
//! fall back to raw bounded or delimited reads when token classes get in the
//! way. The [`decode`] module turns scanned number tokens into machine
//! integers and floats.

pub mod decode;
mod lexer;

pub use lexer::Lexer;
pub use strand_lexer_core::{Token, TokenKind};
