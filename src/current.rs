//! Process-wide current logger and free-function calls
//!
//! The slot starts out holding a [`ConsoleLogger`] and can be replaced at any
//! time. Each free function clones the current handle and releases the slot
//! before logging, so a logger may itself replace the slot without
//! deadlocking. Replacement is last-writer-wins.
//!
//! ```
//! use polylog::{args, current, set_current, Level, Logger, SharedBuffer, WriterLogger};
//! use std::sync::Arc;
//!
//! let buf = SharedBuffer::new();
//! let previous = set_current(Arc::new(WriterLogger::new(buf.clone())));
//!
//! polylog::warn(&args!["from anywhere"]);
//! assert_eq!(buf.contents(), "[WARN]  from anywhere\n");
//!
//! set_current(previous);
//! ```

use crate::backends::ConsoleLogger;
use crate::core::{Arg, Level, Logger};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

static CURRENT: Lazy<RwLock<Arc<dyn Logger>>> =
    Lazy::new(|| RwLock::new(Arc::new(ConsoleLogger::new())));

/// Handle to the logger currently in the slot.
pub fn current() -> Arc<dyn Logger> {
    CURRENT.read().clone()
}

/// Replace the current logger, returning the previous one.
pub fn set_current(logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
    std::mem::replace(&mut *CURRENT.write(), logger)
}

pub fn prefix() -> String {
    current().prefix()
}

pub fn set_prefix(prefix: &str) -> String {
    current().set_prefix(prefix)
}

pub fn level() -> Level {
    current().level()
}

pub fn set_level(level: Level) -> Level {
    current().set_level(level)
}

pub fn log(level: Level, args: &[Arg]) {
    current().log(level, args);
}

pub fn logf(level: Level, template: &str, args: &[Arg]) {
    current().logf(level, template, args);
}

pub fn trace(args: &[Arg]) {
    current().trace(args);
}

pub fn debug(args: &[Arg]) {
    current().debug(args);
}

pub fn info(args: &[Arg]) {
    current().info(args);
}

pub fn warn(args: &[Arg]) {
    current().warn(args);
}

pub fn error(args: &[Arg]) {
    current().error(args);
}

pub fn panic(args: &[Arg]) {
    current().panic(args);
}

pub fn fatal(args: &[Arg]) {
    current().fatal(args);
}

pub fn tracef(template: &str, args: &[Arg]) {
    current().tracef(template, args);
}

pub fn debugf(template: &str, args: &[Arg]) {
    current().debugf(template, args);
}

pub fn infof(template: &str, args: &[Arg]) {
    current().infof(template, args);
}

pub fn warnf(template: &str, args: &[Arg]) {
    current().warnf(template, args);
}

pub fn errorf(template: &str, args: &[Arg]) {
    current().errorf(template, args);
}

pub fn panicf(template: &str, args: &[Arg]) {
    current().panicf(template, args);
}

pub fn fatalf(template: &str, args: &[Arg]) {
    current().fatalf(template, args);
}
