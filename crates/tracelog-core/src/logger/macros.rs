//! Convenience macros
//!
//! The tracing macros capture the enclosing function as the call site, so a
//! trace line names `Scope::function` without any stack inspection.

/// `&'static CallSite` for the enclosing function
///
/// Resolved once per expansion site and cached.
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __tracelog_call_site() {}
        static SITE: $crate::__private::OnceCell<$crate::CallSite> =
            $crate::__private::OnceCell::new();
        SITE.get_or_init(|| {
            $crate::CallSite::from_path($crate::__private::type_name_of(__tracelog_call_site))
        })
    }};
}

/// Log entry into the enclosing function
///
/// ```
/// # use std::sync::Arc;
/// # use tracelog_core::{enter, exit, LoggerRegistry, sink::NoOpSink};
/// # let registry = LoggerRegistry::new(Arc::new(NoOpSink), true);
/// let logger = registry.get_logger("Net");
/// enter!(logger);
/// enter!(logger, "connect {}:{}", "host", 80);
/// # exit!(logger);
/// # exit!(logger);
/// ```
#[macro_export]
macro_rules! enter {
    ($logger:expr) => {
        $logger.enter($crate::call_site!(), format_args!(""))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.enter($crate::call_site!(), format_args!($($arg)+))
    };
}

/// Log exit from the enclosing function
#[macro_export]
macro_rules! exit {
    ($logger:expr) => {
        $logger.exit($crate::call_site!(), format_args!(""))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.exit($crate::call_site!(), format_args!($($arg)+))
    };
}

/// Log an enter line and an exit line for the enclosing function
#[macro_export]
macro_rules! enter_exit {
    ($logger:expr) => {
        $logger.enter_exit($crate::call_site!(), format_args!(""))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.enter_exit($crate::call_site!(), format_args!($($arg)+))
    };
}

/// Log entry now and exit when the returned guard is dropped
///
/// ```
/// # use std::sync::Arc;
/// # use tracelog_core::{trace_scope, LoggerRegistry, sink::NoOpSink};
/// # let registry = LoggerRegistry::new(Arc::new(NoOpSink), true);
/// let logger = registry.get_logger("Net");
/// {
///     let _trace = trace_scope!(logger, "attempt {}", 1);
/// }
/// assert_eq!(logger.indent(), 1);
/// ```
#[macro_export]
macro_rules! trace_scope {
    ($logger:expr) => {
        $logger.scope($crate::call_site!(), format_args!(""))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.scope($crate::call_site!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}

/// Log an error, optionally with a cause: `log_error!(logger, cause: err, "...")`
#[macro_export]
macro_rules! log_error {
    ($logger:expr, cause: $cause:expr) => {
        $logger.error_cause($cause)
    };
    ($logger:expr, cause: $cause:expr, $($arg:tt)+) => {
        $logger.error_with($cause, format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use crate::logger::{Logger, LoggerRegistry};
    use crate::sink::{LogLevel, MemorySink};

    struct Net;

    impl Net {
        fn connect(logger: &Logger) {
            enter!(logger, "connect {}:{}", "host", 80);
            log_info!(logger, "resolving {}", "host");
            exit!(logger, "ok");
        }

        fn ping(logger: &Logger) {
            enter_exit!(logger);
        }
    }

    fn handshake(logger: &Logger) -> Result<(), io::Error> {
        let _trace = trace_scope!(logger, "tls");
        Err(io::Error::new(io::ErrorKind::Other, "bad cert"))
    }

    fn setup() -> (Arc<Logger>, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let registry = LoggerRegistry::new(sink.clone(), true);
        (registry.get_logger("Net"), sink)
    }

    #[test]
    fn test_call_site_names_enclosing_method() {
        let (logger, sink) = setup();
        Net::connect(&logger);

        let records = sink.records();
        assert_eq!(records[0].message, " !entering Net::connect. connect host:80");
        assert_eq!(records[1].message, "   resolving host");
        assert_eq!(records[2].message, " ~exiting Net::connect. ok");
        assert_eq!(logger.indent(), 1);
    }

    #[test]
    fn test_call_site_for_free_function() {
        let (logger, sink) = setup();
        let _ = handshake(&logger);

        let lines = sink.messages(LogLevel::Debug);
        assert_eq!(lines[0], " !entering tests::handshake. tls");
        assert_eq!(lines[1], " ~exiting tests::handshake. ");
    }

    #[test]
    fn test_call_site_inside_closure() {
        let (logger, sink) = setup();
        let run = || {
            enter!(logger);
            exit!(logger);
        };
        run();

        let lines = sink.messages(LogLevel::Debug);
        assert_eq!(lines[0], " !entering tests::test_call_site_inside_closure. ");
    }

    #[test]
    fn test_enter_exit_macro() {
        let (logger, sink) = setup();
        Net::ping(&logger);
        assert_eq!(
            sink.messages(LogLevel::Debug),
            vec![
                " !entering Net::ping. ".to_string(),
                " ~exiting Net::ping. ".to_string(),
            ]
        );
    }

    #[test]
    fn test_log_macros() {
        let (logger, sink) = setup();
        let cause = io::Error::new(io::ErrorKind::Other, "reset by peer");

        log_warn!(logger, "retry {}", 2);
        log_error!(logger, "plain");
        log_error!(logger, cause: &cause);
        log_error!(logger, cause: &cause, "failed {}", "reason");

        let records = sink.records();
        assert_eq!(records[0].level, LogLevel::Warn);
        assert_eq!(records[0].message, " retry 2");
        assert_eq!(records[1].message, " plain");
        assert_eq!(records[2].message, " reset by peer");
        assert_eq!(records[3].message, " failed reason");
        assert_eq!(records[3].cause.as_deref(), Some("reset by peer"));
    }
}
