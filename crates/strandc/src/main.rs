//! strand CLI
//!
//! Token-level inspection for generic structured text.

mod commands;

use commands::{stats_file, tokens_file, TokensOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: strand tokens <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --hex            Scan digit-started runs as hex");
                eprintln!("  --decode         Show decoded values for number tokens");
                eprintln!("  -v, --verbose    Log debug detail to stderr");
                std::process::exit(1);
            }

            let mut options = TokensOptions::default();
            let mut path = None;

            for arg in args.iter().skip(2) {
                if arg == "--hex" {
                    options.hex_mode = true;
                } else if arg == "--decode" {
                    options.decode = true;
                } else if arg == "--verbose" || arg == "-v" {
                    options.verbose = true;
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: strand tokens <file> [options]");
                std::process::exit(1);
            };

            tokens_file(path, &options);
        }
        "stats" => {
            if args.len() < 3 {
                eprintln!("Usage: strand stats <file> [-v]");
                std::process::exit(1);
            }

            let mut verbose = false;
            let mut path = None;

            for arg in args.iter().skip(2) {
                if arg == "--verbose" || arg == "-v" {
                    verbose = true;
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: strand stats <file> [-v]");
                std::process::exit(1);
            };

            stats_file(path, verbose);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("strand {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Routes `tracing` events from the lexer crates to stderr. The filter
/// comes from `STRAND_LOG` (same syntax as `RUST_LOG`); the default shows
/// warnings and up.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("STRAND_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("strand (token-level inspection for structured text)");
    println!();
    println!("Usage: strand <command> [options]");
    println!();
    println!("Commands:");
    println!("  tokens <file>    Tokenize a file and print every token");
    println!("  stats <file>     Print per-kind token counts");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Tokens options:");
    println!("  --hex            Scan digit-started runs as hex");
    println!("  --decode         Show decoded values for number tokens");
    println!("  --verbose, -v    Log debug detail to stderr");
    println!();
    println!("Environment:");
    println!("  STRAND_LOG       Tracing filter for internal events (RUST_LOG syntax)");
    println!();
    println!("Examples:");
    println!("  strand tokens config.txt");
    println!("  strand tokens dump.bin --hex --decode");
    println!("  strand stats config.txt -v");
}
