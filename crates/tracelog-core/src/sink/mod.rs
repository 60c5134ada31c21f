//! Log sinks: the backends that actually emit formatted lines
//!
//! - `ConsoleSink`: stdout/stderr, used when no platform logger is present
//! - `PlatformSink`: the host `tracing` subscriber
//! - `MemorySink` / `NoOpSink`: injected in tests and by embedders

mod console;
mod memory;
mod noop;
mod platform;
mod traits;

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub use console::ConsoleSink;
pub use memory::{LogRecord, MemorySink};
pub use noop::NoOpSink;
pub use platform::{PlatformSink, PLATFORM_TARGET};
pub use traits::{render_cause, LogLevel, LogSink, SharedSink};

/// Which sink a registry should be built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Platform sink when a `tracing` dispatcher is installed, console otherwise
    #[default]
    Auto,
    Console,
    Platform,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Auto => "auto",
            SinkKind::Console => "console",
            SinkKind::Platform => "platform",
        }
    }
}

impl FromStr for SinkKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(SinkKind::Auto),
            "console" => Ok(SinkKind::Console),
            "platform" => Ok(SinkKind::Platform),
            other => Err(ConfigError::InvalidValue {
                key: "sink".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Build the sink for `kind`, probing the platform for `SinkKind::Auto`
pub fn select_sink(kind: SinkKind) -> SharedSink {
    match kind {
        SinkKind::Console => Arc::new(ConsoleSink::new()),
        SinkKind::Platform => Arc::new(PlatformSink::new()),
        SinkKind::Auto if PlatformSink::is_available() => Arc::new(PlatformSink::new()),
        SinkKind::Auto => Arc::new(ConsoleSink::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_kind_from_str() {
        assert_eq!("console".parse::<SinkKind>().unwrap(), SinkKind::Console);
        assert_eq!(" Platform ".parse::<SinkKind>().unwrap(), SinkKind::Platform);
        assert_eq!("AUTO".parse::<SinkKind>().unwrap(), SinkKind::Auto);
        assert!("syslog".parse::<SinkKind>().is_err());
    }

    #[test]
    fn test_select_explicit_sinks() {
        assert_eq!(select_sink(SinkKind::Console).name(), "console");
        assert_eq!(select_sink(SinkKind::Platform).name(), "platform");
    }

    #[test]
    fn test_select_auto_never_fails() {
        let name = select_sink(SinkKind::Auto).name();
        assert!(name == "console" || name == "platform");
    }
}
