//! Writer backend: wraps an existing byte writer
//!
//! Lines look like stdlib-style loggers: every level is labelled, including
//! Info, and fields are bracketed: `[INFO]  prefix: message [key=value]`.

use crate::core::{
    trim_prefix_suffix, Level, Logger, LoggerState, Message, NamedLogger, Pipeline, Sink,
};
use std::io::Write;

#[derive(Debug)]
pub struct WriterLogger {
    state: LoggerState,
    sink: Sink,
}

impl WriterLogger {
    /// Wrap an existing sink (or anything convertible into one, such as a
    /// [`SharedBuffer`](crate::SharedBuffer)).
    pub fn new(sink: impl Into<Sink>) -> Self {
        Self {
            state: LoggerState::default(),
            sink: sink.into(),
        }
    }

    /// Wrap any `Write` implementation.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::new(Sink::from_writer(writer))
    }

    /// Writer logger on stderr.
    pub fn standard() -> Self {
        Self::new(Sink::stderr())
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }
}

impl Default for WriterLogger {
    fn default() -> Self {
        Self::standard()
    }
}

impl Logger for WriterLogger {
    fn prefix(&self) -> String {
        self.state.prefix()
    }

    /// Accepts `"name"` as well as the stdlib form `"name: "`.
    fn set_prefix(&self, prefix: &str) -> String {
        self.state.set_prefix(trim_prefix_suffix(prefix))
    }

    fn level(&self) -> Level {
        self.state.level()
    }

    fn set_level(&self, level: Level) -> Level {
        self.state.set_level(level)
    }

    fn emit(&self, level: Level, message: Message<'_>) -> String {
        let line = Pipeline::WRITER.compose(level, &self.state.prefix(), message);
        self.sink.emit(&line);
        line
    }
}

impl NamedLogger for WriterLogger {
    fn named(&self, name: &str) -> Self {
        Self {
            state: self.state.named(name),
            sink: self.sink.clone(),
        }
    }
}
