//! Tag to logger registry
//!
//! One `Logger` per distinct tag, created on first lookup and never evicted.
//! Tags come from source code, so the map stays small.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use super::logger::Logger;
use crate::config::LogConfig;
use crate::error::{TraceLogError, TraceLogResult};
use crate::sink::{select_sink, SharedSink, PLATFORM_TARGET};

/// Tag used when a caller passes no tag or an empty one
pub const GENERAL_TAG: &str = "General";

/// Get-or-create map from tag to shared `Logger`
///
/// Every logger of a registry shares its sink and enabled flag. Lookups and
/// insertions are serialised by a single lock, so two threads asking for the
/// same new tag get the same instance.
pub struct LoggerRegistry {
    sink: SharedSink,
    enabled: bool,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    /// Create a registry with an explicit sink and enabled flag
    pub fn new(sink: SharedSink, enabled: bool) -> Self {
        Self {
            sink,
            enabled,
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Create a registry from resolved settings, selecting the sink once
    pub fn from_config(config: &LogConfig) -> Self {
        let sink = select_sink(config.sink);
        tracing::debug!(
            target: PLATFORM_TARGET,
            sink = sink.name(),
            enabled = config.enabled,
            "logger registry created"
        );
        Self::new(sink, config.enabled)
    }

    /// Logger for `tag`, creating it on first use
    ///
    /// `None` and `""` map to the shared `General` logger.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use tracelog_core::LoggerRegistry;
    /// use tracelog_core::sink::NoOpSink;
    ///
    /// let registry = LoggerRegistry::new(Arc::new(NoOpSink), true);
    /// let a = registry.get_logger("Net");
    /// let b = registry.get_logger("Net");
    /// assert!(Arc::ptr_eq(&a, &b));
    /// assert!(Arc::ptr_eq(&registry.get_logger(None), &registry.general()));
    /// ```
    pub fn get_logger<'t>(&self, tag: impl Into<Option<&'t str>>) -> Arc<Logger> {
        let tag = match tag.into() {
            Some(tag) if !tag.is_empty() => tag,
            _ => GENERAL_TAG,
        };

        let mut loggers = self.loggers.lock();
        if let Some(logger) = loggers.get(tag) {
            return Arc::clone(logger);
        }

        let logger = Arc::new(Logger::new(tag, Arc::clone(&self.sink), self.enabled));
        loggers.insert(tag.to_string(), Arc::clone(&logger));
        logger
    }

    /// The shared `General` logger
    pub fn general(&self) -> Arc<Logger> {
        self.get_logger(GENERAL_TAG)
    }

    /// Tags that have a logger, sorted
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.loggers.lock().keys().cloned().collect();
        tags.sort();
        tags
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("sink", &self.sink.name())
            .field("enabled", &self.enabled)
            .field("tags", &self.tags())
            .finish()
    }
}

/// Process-wide registry
static GLOBAL: OnceCell<LoggerRegistry> = OnceCell::new();

/// Install the process-wide registry
///
/// Must run before the first `global()` / `get_logger()` call to take
/// effect; afterwards it returns `TraceLogError::AlreadyInitialized`.
pub fn init(config: LogConfig) -> TraceLogResult<()> {
    init_with(LoggerRegistry::from_config(&config))
}

/// Install an explicitly built registry as the process-wide one
pub fn init_with(registry: LoggerRegistry) -> TraceLogResult<()> {
    GLOBAL
        .set(registry)
        .map_err(|_| TraceLogError::AlreadyInitialized)
}

/// The process-wide registry, built from `LogConfig::resolve()` if `init`
/// was never called
pub fn global() -> &'static LoggerRegistry {
    GLOBAL.get_or_init(|| LoggerRegistry::from_config(&LogConfig::resolve()))
}

/// Logger for `tag` from the process-wide registry
pub fn get_logger<'t>(tag: impl Into<Option<&'t str>>) -> Arc<Logger> {
    global().get_logger(tag)
}

/// The `General` logger of the process-wide registry
pub fn general() -> Arc<Logger> {
    global().general()
}
