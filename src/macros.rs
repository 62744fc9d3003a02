//! Macros for building argument lists and logging without the ceremony.
//!
//! # Examples
//!
//! ```
//! use polylog::{fields, info, warn, ConsoleLogger, Level, NamedLogger};
//!
//! let logger = ConsoleLogger::new().with_level(Level::Warn);
//!
//! // Below threshold, nothing is formatted
//! info!(logger, "Server started");
//!
//! // Values are concatenated, a trailing `fields!` map becomes fields
//! warn!(logger, "disk low on ", "sda1", fields! { "pct" => 92 });
//! ```

/// Build a `[Arg; N]` from values convertible into [`Arg`](crate::Arg).
///
/// ```
/// use polylog::{args, fields, Arg};
///
/// let call = args!["pct", 92, fields! { "host" => "db1" }];
/// assert_eq!(call.len(), 3);
/// assert!(matches!(call[2], Arg::Fields(_)));
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {{
        let empty: [$crate::Arg; 0] = [];
        empty
    }};
    ($($arg:expr),+ $(,)?) => {
        [$($crate::Arg::from($arg)),+]
    };
}

/// Build a [`FieldMap`](crate::FieldMap) from `key => value` pairs.
///
/// ```
/// use polylog::fields;
///
/// let map = fields! { "user" => "ada", "attempts" => 3 };
/// assert_eq!(map.len(), 2);
/// assert!(fields!().is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::FieldMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::FieldMap::new()$(.with_field($key, $value))+
    };
}

/// Log at a runtime level.
///
/// ```
/// use polylog::{log, Level, SharedBuffer, WriterLogger};
///
/// let buf = SharedBuffer::new();
/// let logger = WriterLogger::new(buf.clone());
/// log!(logger, Level::Error, "code ", 500);
/// assert_eq!(buf.contents(), "[ERROR] code 500\n");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)*) => {
        $crate::Logger::log(&$logger, $level, &$crate::args![$($arg),*])
    };
}

/// Log a printf-style template at a runtime level.
///
/// ```
/// use polylog::{logf, Level, SharedBuffer, WriterLogger};
///
/// let buf = SharedBuffer::new();
/// let logger = WriterLogger::new(buf.clone());
/// logf!(logger, Level::Warn, "%d%% full", 92);
/// assert_eq!(buf.contents(), "[WARN]  92% full\n");
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)*) => {
        $crate::Logger::logf(&$logger, $level, $template, &$crate::args![$($arg),*])
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $arg:expr)*) => {
        $crate::log!($logger, $crate::Level::Trace $(, $arg)*)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $arg:expr)*) => {
        $crate::log!($logger, $crate::Level::Debug $(, $arg)*)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $arg:expr)*) => {
        $crate::log!($logger, $crate::Level::Info $(, $arg)*)
    };
}

/// Log a warning.
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $arg:expr)*) => {
        $crate::log!($logger, $crate::Level::Warn $(, $arg)*)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $arg:expr)*) => {
        $crate::log!($logger, $crate::Level::Error $(, $arg)*)
    };
}

/// Log a fatal message and exit the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $arg:expr)*) => {
        $crate::log!($logger, $crate::Level::Fatal $(, $arg)*)
    };
}

/// Log a panic-level message and unwind with a [`LogPanic`](crate::LogPanic).
#[macro_export]
macro_rules! panic {
    ($logger:expr $(, $arg:expr)*) => {
        $crate::log!($logger, $crate::Level::Panic $(, $arg)*)
    };
}

/// Log a printf-style trace message.
#[macro_export]
macro_rules! tracef {
    ($logger:expr, $template:expr $(, $arg:expr)*) => {
        $crate::logf!($logger, $crate::Level::Trace, $template $(, $arg)*)
    };
}

/// Log a printf-style debug message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $template:expr $(, $arg:expr)*) => {
        $crate::logf!($logger, $crate::Level::Debug, $template $(, $arg)*)
    };
}

/// Log a printf-style info message.
///
/// ```
/// use polylog::{fields, infof, SharedBuffer, WriterLogger};
///
/// let buf = SharedBuffer::new();
/// let logger = WriterLogger::new(buf.clone());
/// infof!(logger, "listening on %s:%d", "0.0.0.0", 8080, fields! { "tls" => true });
/// assert_eq!(buf.contents(), "[INFO]  listening on 0.0.0.0:8080 [tls=true]\n");
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $template:expr $(, $arg:expr)*) => {
        $crate::logf!($logger, $crate::Level::Info, $template $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $template:expr $(, $arg:expr)*) => {
        $crate::logf!($logger, $crate::Level::Warn, $template $(, $arg)*)
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $template:expr $(, $arg:expr)*) => {
        $crate::logf!($logger, $crate::Level::Error, $template $(, $arg)*)
    };
}

/// Log a printf-style panic message and unwind.
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $template:expr $(, $arg:expr)*) => {
        $crate::logf!($logger, $crate::Level::Panic, $template $(, $arg)*)
    };
}

/// Log a printf-style fatal message and exit the process with status 1.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $template:expr $(, $arg:expr)*) => {
        $crate::logf!($logger, $crate::Level::Fatal, $template $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Level, Logger, NamedLogger, SharedBuffer, WriterLogger};

    #[test]
    fn test_level_macros() {
        let buf = SharedBuffer::new();
        let logger = WriterLogger::new(buf.clone()).with_level(Level::Trace);

        trace!(logger, "t");
        debug!(logger, "d");
        info!(logger, "i", fields! { "k" => 1 });
        warn!(logger, "w", 2);
        error!(logger, 1, 2);

        assert_eq!(
            buf.contents(),
            "[TRACE] t\n[DEBUG] d\n[INFO]  i [k=1]\n[WARN]  w2\n[ERROR] 1 2\n"
        );
    }

    #[test]
    fn test_macros_accept_references_and_arcs() {
        let buf = SharedBuffer::new();
        let logger = std::sync::Arc::new(WriterLogger::new(buf.clone()));
        let by_ref = &*logger;

        info!(logger, "arc");
        info!(by_ref, "ref");
        logf!(logger, Level::Error, "%s=%d", "n", 3);

        assert_eq!(logger.level(), Level::Info);
        assert_eq!(buf.contents(), "[INFO]  arc\n[INFO]  ref\n[ERROR] n=3\n");
    }

    #[test]
    fn test_template_level_macros() {
        let buf = SharedBuffer::new();
        let logger = WriterLogger::new(buf.clone()).with_level(Level::Trace);

        tracef!(logger, "t%d", 1);
        debugf!(logger, "d");
        infof!(logger, "%s", "i", fields! { "k" => 1 });
        warnf!(logger, "%d%%", 92);
        errorf!(logger, "%d");

        assert_eq!(
            buf.contents(),
            "[TRACE] t1\n[DEBUG] d\n[INFO]  i [k=1]\n[WARN]  92%\n[ERROR] %!d(MISSING)\n"
        );
    }

    #[test]
    fn test_panic_macros_unwind_with_the_line() {
        use crate::LogPanic;
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let buf = SharedBuffer::new();
        let logger = WriterLogger::new(buf.clone());

        let plain = catch_unwind(AssertUnwindSafe(|| panic!(logger, "bad ", "state")));
        let templated = catch_unwind(AssertUnwindSafe(|| panicf!(logger, "code %d", 7)));

        for result in [plain, templated] {
            let payload = result.expect_err("panic level unwinds");
            assert!(payload.downcast_ref::<LogPanic>().is_some());
        }
        assert_eq!(buf.contents(), "[PANIC] bad state\n[PANIC] code 7\n");
    }
}
