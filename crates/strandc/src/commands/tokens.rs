//! Token dump command.

use strand_diagnostic::{ColorMode, LogEmitter, Severity, TerminalLogger};
use strand_lexer::decode::{self, Radix};
use strand_lexer::{Lexer, Token, TokenKind};

use super::read_file;

/// Options for the token dump.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokensOptions {
    /// Scan digit-started runs as hex for the whole stream.
    pub hex_mode: bool,
    /// Show decoded values next to number tokens.
    pub decode: bool,
    /// Log debug detail to stderr.
    pub verbose: bool,
}

/// Tokenizes `path` and prints one line per token.
pub fn tokens_file(path: &str, options: &TokensOptions) {
    let mut log = TerminalLogger::stderr(ColorMode::Auto);
    if options.verbose {
        log = log.with_min_severity(Severity::Debug);
    }

    let bytes = read_file(path, &mut log);
    log.log(
        Severity::Debug,
        &format!("read {} bytes from {path}", bytes.len()),
    );

    let lexer = Lexer::from_bytes(&bytes).with_hex_mode(options.hex_mode);
    let tokens: Vec<Token> = lexer.collect();

    println!("Tokens for '{path}' ({} tokens):", tokens.len());
    for token in &tokens {
        if options.decode && matches!(token.kind, TokenKind::Decimal | TokenKind::Hex) {
            match decoded(token) {
                Some(value) => {
                    println!("  {:?} {:?} = {value}", token.kind, token.text);
                    continue;
                }
                None => log.log(
                    Severity::Warning,
                    &format!("could not decode {:?} {:?}", token.kind, token.text),
                ),
            }
        }
        println!("  {:?} {:?}", token.kind, token.text);
    }
}

/// Decodes a number token for display. Decimal runs with a point become
/// floats; everything else decodes as a signed integer of its base.
fn decoded(token: &Token) -> Option<String> {
    match token.kind {
        TokenKind::Decimal if token.text.contains('.') => {
            decode::parse_f64(token).map(|value| value.to_string())
        }
        TokenKind::Decimal => {
            decode::parse_i64(token, Radix::Decimal).map(|value| value.to_string())
        }
        TokenKind::Hex => decode::parse_i64(token, Radix::Hex).map(|value| value.to_string()),
        _ => None,
    }
}
