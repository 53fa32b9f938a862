//! Colored line-oriented logging to a terminal or any `io::Write` sink.

use std::io::{self, IsTerminal, Write};

use crate::severity::Severity;

use super::LogEmitter;

/// ANSI escape codes for the severity palette.
mod colors {
    pub const DEBUG: &str = "\x1b[1;36m"; // bright cyan
    pub const INFO: &str = "\x1b[1;37m"; // bright white
    pub const WARNING: &str = "\x1b[1;33m"; // bright yellow
    pub const ERROR: &str = "\x1b[1;31m"; // bright red
    pub const FATAL: &str = "\x1b[1;37;41m"; // white on red
    pub const RESET: &str = "\x1b[0m";
}

fn color_for(severity: Severity) -> &'static str {
    match severity {
        Severity::Debug => colors::DEBUG,
        Severity::Info => colors::INFO,
        Severity::Warning => colors::WARNING,
        Severity::Error => colors::ERROR,
        Severity::Fatal => colors::FATAL,
    }
}

/// When to emit ANSI color codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when the sink is a terminal.
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    /// Resolves the mode against whether the sink is a terminal.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            Self::Auto => is_tty,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// A [`LogEmitter`] that writes `severity: message` lines to a sink.
///
/// Lines below the minimum severity are dropped before any formatting.
/// Write failures are swallowed; logging must never take the process down.
pub struct TerminalLogger<W: Write> {
    writer: W,
    use_colors: bool,
    min_severity: Severity,
}

impl<W: Write> TerminalLogger<W> {
    /// Creates a logger with an explicit color switch and the default
    /// `Info` minimum.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self {
            writer,
            use_colors,
            min_severity: Severity::Info,
        }
    }

    /// Creates a logger resolving `mode` against `is_tty`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        Self::new(writer, mode.should_use_colors(is_tty))
    }

    /// Drops everything below `min` from here on.
    #[must_use]
    pub fn with_min_severity(mut self, min: Severity) -> Self {
        self.min_severity = min;
        self
    }
}

impl TerminalLogger<io::Stderr> {
    /// Logger on stderr; colors resolved against whether stderr is a
    /// terminal.
    pub fn stderr(mode: ColorMode) -> Self {
        let is_tty = io::stderr().is_terminal();
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl TerminalLogger<io::Stdout> {
    /// Logger on stdout; colors resolved against whether stdout is a
    /// terminal.
    pub fn stdout(mode: ColorMode) -> Self {
        let is_tty = io::stdout().is_terminal();
        Self::with_color_mode(io::stdout(), mode, is_tty)
    }
}

impl<W: Write> LogEmitter for TerminalLogger<W> {
    fn log(&mut self, severity: Severity, message: &str) {
        if severity < self.min_severity {
            return;
        }
        if self.use_colors {
            let _ = write!(
                self.writer,
                "{color}{severity}{reset}: ",
                color = color_for(severity),
                reset = colors::RESET
            );
        } else {
            let _ = write!(self.writer, "{severity}: ");
        }
        let _ = writeln!(self.writer, "{message}");
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{ColorMode, LogEmitter, Severity, TerminalLogger};

    fn logged(use_colors: bool, min: Severity, lines: &[(Severity, &str)]) -> String {
        let mut output = Vec::new();
        {
            let mut logger =
                TerminalLogger::new(&mut output, use_colors).with_min_severity(min);
            for (severity, message) in lines {
                logger.log(*severity, message);
            }
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn plain_lines_have_label_and_newline() {
        let text = logged(false, Severity::Debug, &[(Severity::Error, "broken pipe")]);
        assert_eq!(text, "error: broken pipe\n");
    }

    #[test]
    fn colored_lines_wrap_the_label() {
        let text = logged(true, Severity::Debug, &[(Severity::Error, "boom")]);
        assert_eq!(text, "\x1b[1;31merror\x1b[0m: boom\n");
    }

    #[test]
    fn fatal_is_white_on_red() {
        let text = logged(true, Severity::Debug, &[(Severity::Fatal, "cannot continue")]);
        assert!(text.contains("\x1b[1;37;41m"), "got {text:?}");
    }

    #[test]
    fn lines_below_the_minimum_are_dropped() {
        let text = logged(
            false,
            Severity::Warning,
            &[
                (Severity::Debug, "hidden"),
                (Severity::Info, "hidden too"),
                (Severity::Warning, "kept"),
                (Severity::Error, "also kept"),
            ],
        );
        assert_eq!(text, "warning: kept\nerror: also kept\n");
    }

    #[test]
    fn default_minimum_hides_debug() {
        let mut output = Vec::new();
        {
            let mut logger = TerminalLogger::new(&mut output, false);
            logger.log(Severity::Debug, "hidden");
            logger.log(Severity::Info, "shown");
        }
        assert_eq!(String::from_utf8(output).unwrap(), "info: shown\n");
    }

    #[test]
    fn log_all_preserves_order() {
        let mut output = Vec::new();
        {
            let mut logger = TerminalLogger::new(&mut output, false);
            logger.log_all(&[
                (Severity::Info, String::from("first")),
                (Severity::Error, String::from("second")),
            ]);
        }
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "info: first\nerror: second\n"
        );
    }

    #[test]
    fn color_mode_resolves_against_tty() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
    }
}
