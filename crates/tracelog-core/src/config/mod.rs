//! Configuration for the logging subsystem
//!
//! - `LogConfig`: the resolved settings a registry is built from
//! - `FileConfig`: YAML file at `~/.config/tracelog/config.yaml`
//! - `log_enabled`: the process-wide enabled flag, resolved once

mod enabled;
mod file;

use std::env;
use std::path::Path;

use crate::error::ConfigResult;
use crate::sink::SinkKind;

pub use enabled::{log_enabled, parse_bool, ENABLED_ENV};
pub use file::FileConfig;

/// Environment variable that overrides the configured sink
pub const SINK_ENV: &str = "TRACELOG_SINK";

/// Settings a `LoggerRegistry` is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether enter/exit/info/warn produce output; errors are always logged
    pub enabled: bool,
    /// Which sink to emit through
    pub sink: SinkKind,
}

impl Default for LogConfig {
    /// The cached process-wide enabled flag with `SinkKind::Auto`
    fn default() -> Self {
        Self {
            enabled: log_enabled(),
            sink: SinkKind::Auto,
        }
    }
}

impl LogConfig {
    pub fn new(enabled: bool, sink: SinkKind) -> Self {
        Self { enabled, sink }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_sink(mut self, sink: SinkKind) -> Self {
        self.sink = sink;
        self
    }

    /// Resolve settings from the environment and the user config file
    ///
    /// Never fails: the enabled flag degrades to `false` and the sink to
    /// `SinkKind::Auto` when their sources can't be read.
    pub fn resolve() -> Self {
        let env_sink = env::var(SINK_ENV).ok();
        Self {
            enabled: log_enabled(),
            sink: resolve_sink(env_sink.as_deref(), FileConfig::load_user().ok()),
        }
    }

    /// Build settings from a specific config file
    ///
    /// Unlike `resolve`, parse errors are reported. An absent `enabled` key
    /// falls back to `log_enabled()`, an absent `sink` to `SinkKind::Auto`.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let file = FileConfig::load(path)?;
        let defaults = Self::default();
        Ok(Self {
            enabled: file.enabled.unwrap_or(defaults.enabled),
            sink: file.sink.unwrap_or(defaults.sink),
        })
    }
}

fn resolve_sink(env_value: Option<&str>, file: Option<FileConfig>) -> SinkKind {
    if let Some(kind) = env_value.and_then(|v| v.parse().ok()) {
        return kind;
    }
    file.and_then(|f| f.sink).unwrap_or_default()
}
