//! Platform sink backed by the `tracing` crate

use std::error::Error;

use super::traits::{render_cause, LogSink};

/// Target attached to every event emitted by `PlatformSink`
pub const PLATFORM_TARGET: &str = "tracelog";

/// Sink that forwards each severity to the matching `tracing` macro
///
/// The tag travels as a `tag` field and error causes as a rendered `cause`
/// field, so whatever subscriber the host installed decides the final
/// layout.
///
/// ```no_run
/// use tracelog_core::sink::{LogSink, PlatformSink};
///
/// // Assumes a tracing subscriber is already installed
/// PlatformSink::new().info("Net", " connected");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformSink;

impl PlatformSink {
    /// Create a new platform sink
    pub fn new() -> Self {
        Self
    }

    /// Whether a `tracing` dispatcher has been installed in this process
    pub fn is_available() -> bool {
        tracing::dispatcher::has_been_set()
    }
}

impl LogSink for PlatformSink {
    fn debug(&self, tag: &str, message: &str) {
        tracing::debug!(target: PLATFORM_TARGET, tag = %tag, "{}", message);
    }

    fn info(&self, tag: &str, message: &str) {
        tracing::info!(target: PLATFORM_TARGET, tag = %tag, "{}", message);
    }

    fn warn(&self, tag: &str, message: &str) {
        tracing::warn!(target: PLATFORM_TARGET, tag = %tag, "{}", message);
    }

    fn error(&self, tag: &str, message: &str, cause: Option<&(dyn Error + 'static)>) {
        match cause {
            Some(cause) => {
                let cause = render_cause(cause);
                tracing::error!(target: PLATFORM_TARGET, tag = %tag, cause = %cause, "{}", message);
            }
            None => tracing::error!(target: PLATFORM_TARGET, tag = %tag, "{}", message),
        }
    }

    fn name(&self) -> &'static str {
        "platform"
    }
}
