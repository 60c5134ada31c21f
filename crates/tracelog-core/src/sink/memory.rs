//! In-memory capturing sink

use std::error::Error;

use parking_lot::Mutex;

use super::traits::{render_cause, LogLevel, LogSink};

/// One line written to a `MemorySink`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub tag: String,
    pub message: String,
    /// Rendered cause chain, for error records that carried one
    pub cause: Option<String>,
}

/// Sink that keeps every record in memory
///
/// Intended for tests and for embedders that want to inspect trace output
/// instead of printing it.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tracelog_core::sink::{LogLevel, LogSink, MemorySink};
///
/// let sink = Arc::new(MemorySink::new());
/// sink.info("Net", " connected");
/// assert_eq!(sink.messages(LogLevel::Info), vec![" connected".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    /// Create a new empty memory sink
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every captured record, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Messages captured at `level`, oldest first
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    /// Number of captured records
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if nothing was captured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all captured records
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    fn push(&self, level: LogLevel, tag: &str, message: &str, cause: Option<String>) {
        self.records.lock().push(LogRecord {
            level,
            tag: tag.to_string(),
            message: message.to_string(),
            cause,
        });
    }
}

impl LogSink for MemorySink {
    fn debug(&self, tag: &str, message: &str) {
        self.push(LogLevel::Debug, tag, message, None);
    }

    fn info(&self, tag: &str, message: &str) {
        self.push(LogLevel::Info, tag, message, None);
    }

    fn warn(&self, tag: &str, message: &str) {
        self.push(LogLevel::Warn, tag, message, None);
    }

    fn error(&self, tag: &str, message: &str, cause: Option<&(dyn Error + 'static)>) {
        self.push(LogLevel::Error, tag, message, cause.map(render_cause));
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_captures_levels() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.debug("A", "d");
        sink.info("A", "i");
        sink.warn("B", "w");
        sink.error("B", "e", None);

        assert_eq!(sink.len(), 4);
        assert_eq!(sink.messages(LogLevel::Warn), vec!["w".to_string()]);

        let records = sink.records();
        assert_eq!(records[0].level, LogLevel::Debug);
        assert_eq!(records[2].tag, "B");
        assert!(records[3].cause.is_none());
    }

    #[test]
    fn test_memory_sink_renders_cause() {
        let sink = MemorySink::new();
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "no such host");
        sink.error("Net", "lookup failed", Some(&cause));

        let records = sink.records();
        assert_eq!(records[0].cause.as_deref(), Some("no such host"));
    }

    #[test]
    fn test_memory_sink_clear() {
        let sink = MemorySink::new();
        sink.info("A", "x");
        sink.clear();
        assert!(sink.is_empty());
    }
}
