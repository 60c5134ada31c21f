//! The tag-scoped logger and its enter/exit tracing engine

use std::error::Error;
use std::fmt::{self, Arguments};

use parking_lot::Mutex;

use super::call_site::CallSite;
use super::indent::{spaces, IndentState};
use crate::sink::SharedSink;

/// A logging channel identified by a tag
///
/// Loggers are handed out by a `LoggerRegistry` as `Arc<Logger>`; every
/// caller using the same tag shares one instance and therefore one nesting
/// depth. The depth is guarded by a per-logger lock: concurrent tracing on
/// one tag from several threads interleaves visually but never corrupts the
/// counter.
///
/// Everything except the error family is a no-op when the logger was built
/// with logging disabled.
///
/// # Output
///
/// | Operation | Line handed to the sink                      |
/// |-----------|----------------------------------------------|
/// | enter     | `<N spaces>!entering Scope::function. <msg>` |
/// | exit      | `<N spaces>~exiting Scope::function. <msg>`  |
/// | info/warn | `<N spaces><msg>`                            |
/// | error     | `<N spaces><msg>` plus the cause             |
///
/// `N` is the live depth; `exit` reduces it before rendering.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tracelog_core::{enter, exit, LoggerRegistry};
/// use tracelog_core::sink::{LogLevel, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// let registry = LoggerRegistry::new(sink.clone(), true);
/// let logger = registry.get_logger("Net");
///
/// enter!(logger, "connect {}:{}", "host", 80);
/// exit!(logger, "ok");
///
/// let lines = sink.messages(LogLevel::Debug);
/// assert!(lines[0].starts_with(" !entering "));
/// assert!(lines[1].ends_with(". ok"));
/// ```
pub struct Logger {
    tag: String,
    sink: SharedSink,
    enabled: bool,
    state: Mutex<IndentState>,
}

impl Logger {
    pub(crate) fn new(tag: impl Into<String>, sink: SharedSink, enabled: bool) -> Self {
        Self {
            tag: tag.into(),
            sink,
            enabled,
            state: Mutex::new(IndentState::new()),
        }
    }

    /// Tag this logger was registered under
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether enter/exit/info/warn produce output
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current nesting depth
    pub fn indent(&self) -> usize {
        self.state.lock().current()
    }

    /// Log entry into `site` and deepen the nesting
    pub fn enter(&self, site: &CallSite, args: Arguments<'_>) {
        if self.enabled {
            self.log_enter(site, &args.to_string());
        }
    }

    /// Shallow the nesting and log exit from `site`
    pub fn exit(&self, site: &CallSite, args: Arguments<'_>) {
        if self.enabled {
            self.log_exit(site, &args.to_string());
        }
    }

    /// Enter line immediately followed by an exit line with the same message
    pub fn enter_exit(&self, site: &CallSite, args: Arguments<'_>) {
        if self.enabled {
            let message = args.to_string();
            self.log_enter(site, &message);
            self.log_exit(site, &message);
        }
    }

    /// Log entry into `site` and return a guard that logs the exit on drop
    ///
    /// Keeps enter and exit balanced across early returns and `?`.
    pub fn scope<'a>(&'a self, site: &'a CallSite, args: Arguments<'_>) -> TraceGuard<'a> {
        self.enter(site, args);
        TraceGuard { logger: self, site }
    }

    /// Log an info line at the current depth
    pub fn info(&self, args: Arguments<'_>) {
        if self.enabled {
            let line = self.indented(&args.to_string());
            self.sink.info(&self.tag, &line);
        }
    }

    /// Log a warning line at the current depth
    pub fn warn(&self, args: Arguments<'_>) {
        if self.enabled {
            let line = self.indented(&args.to_string());
            self.sink.warn(&self.tag, &line);
        }
    }

    /// Log an error; emitted even when logging is disabled
    pub fn error(&self, args: Arguments<'_>) {
        self.log_error(&args.to_string(), None);
    }

    /// Log `cause` using its display text as the message
    pub fn error_cause(&self, cause: &(dyn Error + 'static)) {
        self.log_error(&cause.to_string(), Some(cause));
    }

    /// Log a formatted message together with `cause`
    pub fn error_with(&self, cause: &(dyn Error + 'static), args: Arguments<'_>) {
        self.log_error(&args.to_string(), Some(cause));
    }

    fn indented(&self, message: &str) -> String {
        format!("{}{}", spaces(self.indent()), message)
    }

    fn log_enter(&self, site: &CallSite, message: &str) {
        let (line, saturated) = {
            let mut state = self.state.lock();
            let line = format!("{}!entering {}. {}", spaces(state.current()), site, message);
            (line, state.push())
        };

        self.sink.debug(&self.tag, &line);

        if let Some(depth) = saturated {
            let warning = format!("{}Indent is too large: {}", spaces(depth), depth);
            self.sink.warn(&self.tag, &warning);
        }
    }

    fn log_exit(&self, site: &CallSite, message: &str) {
        let depth = self.state.lock().pop();
        let line = format!("{}~exiting {}. {}", spaces(depth), site, message);
        self.sink.debug(&self.tag, &line);
    }

    fn log_error(&self, message: &str, cause: Option<&(dyn Error + 'static)>) {
        let line = self.indented(message);
        self.sink.error(&self.tag, &line, cause);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tag", &self.tag)
            .field("enabled", &self.enabled)
            .field("indent", &self.indent())
            .field("sink", &self.sink.name())
            .finish()
    }
}

/// Exit line pending for a `Logger::scope` call
#[must_use = "the exit line is logged when the guard is dropped"]
pub struct TraceGuard<'a> {
    logger: &'a Logger,
    site: &'a CallSite,
}

impl Drop for TraceGuard<'_> {
    fn drop(&mut self) {
        self.logger.exit(self.site, format_args!(""));
    }
}
