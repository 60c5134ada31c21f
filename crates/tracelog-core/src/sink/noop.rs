//! No-op sink implementation

use std::error::Error;

use super::traits::LogSink;

/// A sink that discards every line
///
/// Useful for benchmarks or for embedders that only want the error path
/// silenced along with everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for NoOpSink {
    fn debug(&self, _tag: &str, _message: &str) {}
    fn info(&self, _tag: &str, _message: &str) {}
    fn warn(&self, _tag: &str, _message: &str) {}
    fn error(&self, _tag: &str, _message: &str, _cause: Option<&(dyn Error + 'static)>) {}

    fn name(&self) -> &'static str {
        "noop"
    }
}
