//! # polylog
//!
//! One structured-logging contract, many interchangeable backends.
//!
//! ## Features
//!
//! - **One contract**: [`Logger`] with seven leveled calls and seven
//!   printf-style variants, each accepting a trailing [`FieldMap`]
//! - **Deterministic formatting**: every backend runs the same
//!   [`Pipeline`] stages, so `[LEVEL] prefix: message key=value` reads the
//!   same wherever it lands
//! - **Backends**: console, wrapped writer, JSON/logfmt records, `tracing`
//! - **Terminal levels**: Panic unwinds with a [`LogPanic`] payload, Fatal
//!   exits with status 1
//!
//! ## Example
//!
//! ```
//! use polylog::{args, fields, ConsoleLogger, Level, Logger, NamedLogger, SharedBuffer};
//!
//! let buf = SharedBuffer::new();
//! let logger = ConsoleLogger::builder()
//!     .colors(false)
//!     .output_all(buf.clone())
//!     .build()
//!     .named("svc");
//!
//! logger.warn(&args!["disk low", fields! { "pct" => 92 }]);
//! logger.debug(&args!["below threshold"]);
//! logger.infof("listening on %d", &args![8080]);
//!
//! assert_eq!(
//!     buf.contents(),
//!     "[WARN]  svc: disk low pct=92\nsvc: listening on 8080\n"
//! );
//! ```

pub mod macros;

pub mod backends;
pub mod core;
pub mod current;
pub mod io;

pub mod prelude {
    pub use crate::backends::{ConsoleLogger, StructuredLogger, WriterLogger};
    pub use crate::core::{
        Arg, FieldMap, FieldValue, Level, LogPanic, Logger, LoggerConfig, LoggerError,
        NamedLogger, Result, SharedBuffer, Sink,
    };
    pub use crate::{args, fields};
}

#[cfg(feature = "tracing")]
pub use backends::TracingLogger;
pub use backends::{ConsoleLogger, ConsoleLoggerBuilder, RecordFormat, StructuredLogger, WriterLogger};
pub use core::{
    join_prefix, parse_args, sprint, sprintf, trim_prefix_suffix, Arg, FieldMap, FieldStyle,
    FieldValue, Level, LevelLabel, LogFormat, LogPanic, Logger, LoggerConfig, LoggerError,
    LoggerState, Message, NamedLogger, Pending, Pipeline, Result, SharedBuffer, Sink, Stream,
};
pub use current::{
    current, debug, debugf, error, errorf, fatal, fatalf, info, infof, level, log, logf, panic,
    panicf, prefix, set_current, set_level, set_prefix, trace, tracef, warn, warnf,
};
