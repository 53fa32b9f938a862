//! Token statistics command.

use std::collections::HashMap;

use strand_diagnostic::{ColorMode, LogEmitter, Severity, TerminalLogger};
use strand_lexer::{Lexer, TokenKind};

use super::read_file;

/// Tokenizes `path` and prints per-kind counts, busiest kinds first.
pub fn stats_file(path: &str, verbose: bool) {
    let mut log = TerminalLogger::stderr(ColorMode::Auto);
    if verbose {
        log = log.with_min_severity(Severity::Debug);
    }

    let bytes = read_file(path, &mut log);
    log.log(
        Severity::Debug,
        &format!("read {} bytes from {path}", bytes.len()),
    );

    let mut counts: HashMap<TokenKind, usize> = HashMap::new();
    let mut total = 0usize;
    for token in Lexer::from_bytes(&bytes) {
        *counts.entry(token.kind).or_insert(0) += 1;
        total += 1;
    }

    let mut ordered: Vec<(TokenKind, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| (a.0 as u8).cmp(&(b.0 as u8))));

    println!(
        "Token stats for '{path}' ({} bytes, {total} tokens):",
        bytes.len()
    );
    for (kind, count) in ordered {
        println!("  {count:>8}  {}", kind.name());
    }
}
