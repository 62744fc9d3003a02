//! Interchangeable logger backends
//!
//! Every backend implements [`Logger`](crate::Logger) and
//! [`NamedLogger`](crate::NamedLogger); they differ only in how the finished
//! line reaches its destination.

pub mod console;
pub mod structured;
#[cfg(feature = "tracing")]
pub mod tracing;
pub mod writer;

pub use console::{ConsoleLogger, ConsoleLoggerBuilder};
pub use structured::{RecordFormat, StructuredLogger};
#[cfg(feature = "tracing")]
pub use self::tracing::TracingLogger;
pub use writer::WriterLogger;
