//! Minimal severity-gated logging for strand's user-facing tools.
//!
//! This is deliberately not a tracing replacement: the library crates use
//! `tracing` for structured internal events, while the CLI talks to people
//! through this crate. Messages pass through a [`LogEmitter`]; the stock
//! [`TerminalLogger`] writes colored lines to any `io::Write` sink and
//! drops everything below its configured minimum severity.

pub mod emitter;
mod severity;

pub use emitter::{ColorMode, LogEmitter, TerminalLogger};
pub use severity::Severity;
