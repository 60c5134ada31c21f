//! tracelog core
//!
//! A tag-scoped logging facade with call-trace instrumentation. Loggers are
//! looked up by tag, render indented enter/exit lines for the functions they
//! trace, and dispatch everything through a swappable `LogSink` (console or
//! the host `tracing` subscriber).
//!
//! ```rust,no_run
//! use tracelog_core::{enter, exit, log_info, get_logger};
//!
//! fn connect(host: &str, port: u16) {
//!     let log = get_logger("Net");
//!     enter!(log, "connect {}:{}", host, port);
//!     log_info!(log, "resolving {}", host);
//!     exit!(log, "ok");
//! }
//! ```
//!
//! Tracing, info and warn output is produced only when logging is enabled
//! (see `config::log_enabled`). Errors are always emitted.

pub mod config;
pub mod error;
pub mod logger;
pub mod sink;

pub use config::{log_enabled, LogConfig};
pub use error::{ConfigError, TraceLogError, TraceLogResult};
pub use logger::{
    general, get_logger, global, init, init_with, CallSite, Logger, LoggerRegistry, TraceGuard,
    GENERAL_TAG,
};
pub use sink::{ConsoleSink, LogLevel, LogSink, MemorySink, NoOpSink, PlatformSink, SinkKind};

#[doc(hidden)]
pub mod __private {
    pub use crate::logger::call_site::type_name_of;
    pub use once_cell::sync::OnceCell;
}
