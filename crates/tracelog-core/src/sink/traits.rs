//! LogSink trait definition

use std::error::Error;
use std::fmt::Write as _;
use std::sync::Arc;

/// Severity of a single sink write
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO "),
            LogLevel::Warn => write!(f, "WARN "),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Backend that emits already-formatted log lines
///
/// Implementations:
/// - `ConsoleSink`: Writes to stdout/stderr
/// - `PlatformSink`: Forwards to the `tracing` crate
/// - `MemorySink`: Captures records in memory
/// - `NoOpSink`: Discards everything
///
/// Sinks are shared by every `Logger` of a registry, so they must be
/// `Send + Sync` and must not panic on write failures.
pub trait LogSink: Send + Sync {
    /// Write a debug line
    fn debug(&self, tag: &str, message: &str);

    /// Write an info line
    fn info(&self, tag: &str, message: &str);

    /// Write a warning line
    fn warn(&self, tag: &str, message: &str);

    /// Write an error line with an optional cause
    fn error(&self, tag: &str, message: &str, cause: Option<&(dyn Error + 'static)>);

    /// Short name of this sink, used in diagnostics
    fn name(&self) -> &'static str;
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn LogSink>;

/// Render an error and its `source()` chain, one cause per line
///
/// ```
/// use tracelog_core::sink::render_cause;
///
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
/// assert_eq!(render_cause(&err), "disk on fire");
/// ```
pub fn render_cause(cause: &(dyn Error + 'static)) -> String {
    let mut rendered = cause.to_string();
    let mut source = cause.source();
    while let Some(err) = source {
        let _ = write!(rendered, "\nCaused by: {}", err);
        source = err.source();
    }
    rendered
}
