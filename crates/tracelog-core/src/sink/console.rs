//! Console sink implementation

use std::error::Error;
use std::io::{self, Write};

use super::traits::{render_cause, LogSink};

/// A sink that writes to the console (stdout/stderr)
///
/// Debug and warning lines are written exactly like info lines. Errors go to
/// stderr, followed by the cause chain when one is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a new console sink
    pub fn new() -> Self {
        Self
    }

    fn format_line(tag: &str, message: &str) -> String {
        format!("{}: {}", tag, message)
    }

    fn format_error(tag: &str, message: &str, cause: Option<&(dyn Error + 'static)>) -> String {
        let mut out = Self::format_line(tag, message);
        if let Some(cause) = cause {
            out.push('\n');
            out.push_str(&render_cause(cause));
        }
        out
    }
}

impl LogSink for ConsoleSink {
    fn debug(&self, tag: &str, message: &str) {
        self.info(tag, message);
    }

    fn info(&self, tag: &str, message: &str) {
        let _ = writeln!(io::stdout().lock(), "{}", Self::format_line(tag, message));
    }

    fn warn(&self, tag: &str, message: &str) {
        self.info(tag, message);
    }

    fn error(&self, tag: &str, message: &str, cause: Option<&(dyn Error + 'static)>) {
        let _ = writeln!(
            io::stderr().lock(),
            "{}",
            Self::format_error(tag, message, cause)
        );
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
