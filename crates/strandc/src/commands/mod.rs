//! CLI command implementations.

mod stats;
mod tokens;

pub use stats::stats_file;
pub use tokens::{tokens_file, TokensOptions};

use strand_diagnostic::{LogEmitter, Severity};

/// Reads a file as raw bytes, or logs a fatal error and exits.
///
/// Bytes rather than a string: the lexer tolerates arbitrary input, so the
/// CLI should too.
pub(crate) fn read_file(path: &str, log: &mut impl LogEmitter) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) => {
            let reason = match error.kind() {
                std::io::ErrorKind::NotFound => "file not found",
                std::io::ErrorKind::PermissionDenied => "permission denied",
                _ => "could not read file",
            };
            log.log(Severity::Fatal, &format!("{path}: {reason}"));
            std::process::exit(1);
        }
    }
}
