//! The logging contract every backend implements

use super::args::Arg;
use super::level::Level;
use super::pipeline::Message;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Separator between a prefix and the message text.
pub const PREFIX_SUFFIX: &str = ": ";

/// Join a parent prefix and a child name with `.`; an empty parent yields
/// the name alone.
///
/// ```
/// use polylog::join_prefix;
///
/// assert_eq!(join_prefix("a", "b"), "a.b");
/// assert_eq!(join_prefix("", "b"), "b");
/// ```
pub fn join_prefix(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// Strip a trailing `": "` from a prefix written in the style of stdlib
/// loggers, whose native prefix carries the separator.
pub fn trim_prefix_suffix(prefix: &str) -> &str {
    prefix.strip_suffix(PREFIX_SUFFIX).unwrap_or(prefix)
}

/// Unwind payload of a Panic-level call: the final formatted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPanic {
    line: String,
}

impl LogPanic {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}

impl fmt::Display for LogPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Post-write side effect of terminal levels. Panic unwinds with a
/// [`LogPanic`] payload; Fatal exits the process with status 1 without
/// unwinding. Other levels return.
pub fn terminate(level: Level, line: String) {
    match level {
        Level::Panic => std::panic::panic_any(LogPanic::new(line)),
        Level::Fatal => std::process::exit(1),
        _ => {}
    }
}

/// Mutable threshold and prefix owned by one logger instance.
///
/// Reads and writes go through locks, so reconfiguring while other threads
/// log is safe, but ordering between a reconfiguration and concurrent calls
/// is last-writer-wins.
#[derive(Debug)]
pub struct LoggerState {
    level: RwLock<Level>,
    prefix: RwLock<String>,
}

impl LoggerState {
    pub fn new(level: Level, prefix: impl Into<String>) -> Self {
        Self {
            level: RwLock::new(level),
            prefix: RwLock::new(prefix.into()),
        }
    }

    pub fn level(&self) -> Level {
        *self.level.read()
    }

    pub fn set_level(&self, level: Level) -> Level {
        *self.level.write() = level;
        level
    }

    pub fn prefix(&self) -> String {
        self.prefix.read().clone()
    }

    pub fn set_prefix(&self, prefix: &str) -> String {
        let mut current = self.prefix.write();
        *current = prefix.to_string();
        current.clone()
    }

    /// Independent copy with `name` appended to the prefix.
    pub fn named(&self, name: &str) -> Self {
        Self::new(self.level(), join_prefix(&self.prefix.read(), name))
    }
}

impl Default for LoggerState {
    fn default() -> Self {
        Self::new(Level::Info, "")
    }
}

impl Clone for LoggerState {
    fn clone(&self) -> Self {
        Self::new(self.level(), self.prefix())
    }
}

/// Logging contract.
///
/// Backends supply the level/prefix accessors and [`Logger::emit`]; the
/// gate, the fourteen leveled calls and the terminal side effects are
/// provided here so every backend honours them identically.
pub trait Logger: Send + Sync {
    /// Current prefix (may be empty).
    fn prefix(&self) -> String;

    /// Replace the prefix and return the new current value.
    fn set_prefix(&self, prefix: &str) -> String;

    /// Current threshold.
    fn level(&self) -> Level;

    /// Replace the threshold and return the new current value.
    fn set_level(&self, level: Level) -> Level;

    /// Format and write one call that already passed the gate. Returns the
    /// text that a Panic-level call unwinds with.
    fn emit(&self, level: Level, message: Message<'_>) -> String;

    /// Gate: a call passes iff its level is at or above the threshold.
    /// Panic and Fatal get no exemption; a `Silent` threshold suppresses
    /// them too. Calls *at* `Silent` never pass.
    fn enabled(&self, level: Level) -> bool {
        level != Level::Silent && level >= self.level()
    }

    fn log(&self, level: Level, args: &[Arg]) {
        if !self.enabled(level) {
            return;
        }
        let line = self.emit(level, Message::Args(args));
        terminate(level, line);
    }

    fn logf(&self, level: Level, template: &str, args: &[Arg]) {
        if !self.enabled(level) {
            return;
        }
        let line = self.emit(level, Message::Template(template, args));
        terminate(level, line);
    }

    fn trace(&self, args: &[Arg]) {
        self.log(Level::Trace, args);
    }

    fn debug(&self, args: &[Arg]) {
        self.log(Level::Debug, args);
    }

    fn info(&self, args: &[Arg]) {
        self.log(Level::Info, args);
    }

    fn warn(&self, args: &[Arg]) {
        self.log(Level::Warn, args);
    }

    fn error(&self, args: &[Arg]) {
        self.log(Level::Error, args);
    }

    /// Logs, then unwinds with a [`LogPanic`] carrying the formatted line.
    fn panic(&self, args: &[Arg]) {
        self.log(Level::Panic, args);
    }

    /// Logs, then exits the process with status 1.
    fn fatal(&self, args: &[Arg]) {
        self.log(Level::Fatal, args);
    }

    fn tracef(&self, template: &str, args: &[Arg]) {
        self.logf(Level::Trace, template, args);
    }

    fn debugf(&self, template: &str, args: &[Arg]) {
        self.logf(Level::Debug, template, args);
    }

    fn infof(&self, template: &str, args: &[Arg]) {
        self.logf(Level::Info, template, args);
    }

    fn warnf(&self, template: &str, args: &[Arg]) {
        self.logf(Level::Warn, template, args);
    }

    fn errorf(&self, template: &str, args: &[Arg]) {
        self.logf(Level::Error, template, args);
    }

    fn panicf(&self, template: &str, args: &[Arg]) {
        self.logf(Level::Panic, template, args);
    }

    fn fatalf(&self, template: &str, args: &[Arg]) {
        self.logf(Level::Fatal, template, args);
    }
}

/// Optional capabilities: named children and chainable configuration.
pub trait NamedLogger: Logger + Sized {
    /// Independent copy whose prefix is extended with `name`. Level and sink
    /// configuration are copied; later changes to either logger do not
    /// affect the other.
    fn named(&self, name: &str) -> Self;

    #[must_use]
    fn with_level(self, level: Level) -> Self {
        self.set_level(level);
        self
    }

    #[must_use]
    fn with_level_from_debug(self, debug: bool) -> Self {
        self.with_level(Level::from_debug(debug))
    }

    #[must_use]
    fn with_prefix(self, prefix: &str) -> Self {
        self.set_prefix(prefix);
        self
    }

    /// Apply configuration functions in order.
    ///
    /// ```
    /// use polylog::{ConsoleLogger, Level, Logger, NamedLogger};
    ///
    /// type Opt = Box<dyn FnOnce(ConsoleLogger) -> ConsoleLogger>;
    ///
    /// let named: Opt = Box::new(|l| l.named("api"));
    /// let debug: Opt = Box::new(|l| l.with_level_from_debug(true));
    /// let logger = ConsoleLogger::new().options([named, debug]);
    /// assert_eq!(logger.prefix(), "api");
    /// assert_eq!(logger.level(), Level::Debug);
    /// ```
    #[must_use]
    fn options<I, F>(self, funcs: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: FnOnce(Self) -> Self,
    {
        funcs.into_iter().fold(self, |logger, f| f(logger))
    }
}

macro_rules! forward_logger {
    ($($ty:ty),+) => {
        $(
            impl<L: Logger + ?Sized> Logger for $ty {
                fn prefix(&self) -> String {
                    (**self).prefix()
                }

                fn set_prefix(&self, prefix: &str) -> String {
                    (**self).set_prefix(prefix)
                }

                fn level(&self) -> Level {
                    (**self).level()
                }

                fn set_level(&self, level: Level) -> Level {
                    (**self).set_level(level)
                }

                fn emit(&self, level: Level, message: Message<'_>) -> String {
                    (**self).emit(level, message)
                }

                fn enabled(&self, level: Level) -> bool {
                    (**self).enabled(level)
                }

                fn log(&self, level: Level, args: &[Arg]) {
                    (**self).log(level, args)
                }

                fn logf(&self, level: Level, template: &str, args: &[Arg]) {
                    (**self).logf(level, template, args)
                }
            }
        )+
    };
}

forward_logger!(Arc<L>, Box<L>, &L);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fields::FieldMap;
    use crate::core::pipeline::Pipeline;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    /// Minimal backend recording `level=<name> <line>` entries.
    struct Recorder {
        state: LoggerState,
        lines: RwLock<Vec<String>>,
    }

    impl Recorder {
        fn new(level: Level) -> Self {
            Self {
                state: LoggerState::new(level, ""),
                lines: RwLock::new(Vec::new()),
            }
        }

        fn lines(&self) -> Vec<String> {
            self.lines.read().clone()
        }
    }

    impl Logger for Recorder {
        fn prefix(&self) -> String {
            self.state.prefix()
        }

        fn set_prefix(&self, prefix: &str) -> String {
            self.state.set_prefix(prefix)
        }

        fn level(&self) -> Level {
            self.state.level()
        }

        fn set_level(&self, level: Level) -> Level {
            self.state.set_level(level)
        }

        fn emit(&self, level: Level, message: Message<'_>) -> String {
            let line = Pipeline::STRUCTURED.compose(level, &self.prefix(), message);
            self.lines.write().push(format!("level={} {}", level, line));
            line
        }
    }

    #[test]
    fn test_join_prefix() {
        assert_eq!(join_prefix("a", "b"), "a.b");
        assert_eq!(join_prefix(&join_prefix("a", "b"), "c"), "a.b.c");
        assert_eq!(join_prefix("", "b"), "b");
    }

    #[test]
    fn test_trim_prefix_suffix() {
        assert_eq!(trim_prefix_suffix("MyPrefix: "), "MyPrefix");
        assert_eq!(trim_prefix_suffix("MyPrefix"), "MyPrefix");
        assert_eq!(trim_prefix_suffix(""), "");
    }

    #[test]
    fn test_gate() {
        let logger = Recorder::new(Level::Warn);
        logger.debug(&[Arg::from("noisy")]);
        logger.info(&[Arg::from("chatty")]);
        logger.warn(&[Arg::from("kept")]);
        logger.errorf("kept %d", &[Arg::from(2)]);
        assert_eq!(logger.lines(), vec!["level=warning kept", "level=error kept 2"]);
    }

    #[test]
    fn test_silent_is_never_a_message_level() {
        let logger = Recorder::new(Level::Trace);
        logger.log(Level::Silent, &[Arg::from("x")]);
        assert!(logger.lines().is_empty());
    }

    #[test]
    fn test_silent_threshold_suppresses_terminal_levels() {
        let logger = Recorder::new(Level::Silent);
        logger.panic(&[Arg::from("not raised")]);
        logger.panicf("%s", &[Arg::from("not raised")]);
        assert!(logger.lines().is_empty());
    }

    #[test]
    fn test_panic_writes_then_unwinds() {
        let logger = Recorder::new(Level::Trace);
        let fields = FieldMap::new().with_field("baz", "qux");
        let result = catch_unwind(AssertUnwindSafe(|| {
            logger.panic(&[Arg::from("foo bar"), Arg::from(fields)]);
        }));
        let payload = result.unwrap_err();
        let panic = payload.downcast_ref::<LogPanic>().unwrap();
        assert_eq!(panic.line(), "foo bar baz=qux");
        assert_eq!(logger.lines(), vec!["level=panic foo bar baz=qux"]);
    }

    #[test]
    fn test_state_set_returns_current() {
        let state = LoggerState::default();
        assert_eq!(state.level(), Level::Info);
        assert_eq!(state.set_level(Level::Trace), Level::Trace);
        assert_eq!(state.set_prefix("svc"), "svc");
        assert_eq!(state.prefix(), "svc");
    }

    #[test]
    fn test_state_named_is_independent() {
        let parent = LoggerState::new(Level::Debug, "a");
        let child = parent.named("b");
        assert_eq!(child.prefix(), "a.b");
        assert_eq!(child.level(), Level::Debug);
        child.set_level(Level::Error);
        child.set_prefix("z");
        assert_eq!(parent.level(), Level::Debug);
        assert_eq!(parent.prefix(), "a");
    }

    #[test]
    fn test_arc_forwarding() {
        let logger: Arc<dyn Logger> = Arc::new(Recorder::new(Level::Info));
        assert_eq!(logger.set_level(Level::Error), Level::Error);
        assert!(!logger.enabled(Level::Warn));
        assert!(logger.enabled(Level::Fatal));
    }
}
