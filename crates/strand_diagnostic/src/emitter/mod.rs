//! Log emitters.

mod terminal;

pub use terminal::{ColorMode, TerminalLogger};

use crate::severity::Severity;

/// Sink for log lines.
///
/// Implementations decide where lines go and how severities look; callers
/// just hand over a severity and a message.
pub trait LogEmitter {
    /// Emits one line at the given severity.
    fn log(&mut self, severity: Severity, message: &str);

    /// Emits a batch of lines in order.
    fn log_all(&mut self, entries: &[(Severity, String)]) {
        for (severity, message) in entries {
            self.log(*severity, message);
        }
    }
}
