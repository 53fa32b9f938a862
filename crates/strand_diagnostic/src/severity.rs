//! Log severities.

use std::fmt;

/// How serious a log line is.
///
/// Ordered from chattiest to most severe, so a minimum-severity gate is a
/// plain `>=` comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Diagnostic detail for people working on strand itself.
    Debug,
    /// Routine progress.
    Info,
    /// Something looks off but the run continues.
    Warning,
    /// An operation failed.
    Error,
    /// The process cannot usefully continue.
    Fatal,
}

impl Severity {
    /// Lowercase label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
