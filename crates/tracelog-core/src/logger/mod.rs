//! Tag-scoped loggers with enter/exit call tracing
//!
//! - `LoggerRegistry`: one shared `Logger` per tag
//! - `Logger`: indentation-tracking trace engine over a `LogSink`
//! - `CallSite`: the `Scope::function` label of enter/exit lines

pub(crate) mod call_site;
mod indent;
#[allow(clippy::module_inception)]
mod logger;
mod macros;
mod registry;

pub use call_site::CallSite;
pub use indent::{INDENT_LIMIT, INDENT_STEP, INITIAL_INDENT};
pub use logger::{Logger, TraceGuard};
pub use registry::{general, get_logger, global, init, init_with, LoggerRegistry, GENERAL_TAG};
