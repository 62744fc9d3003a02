//! Console backend: terminal-style output with one sink per level

use crate::core::{Level, Logger, LoggerState, Message, NamedLogger, Pipeline, Sink, Stream};
use std::borrow::Cow;

#[cfg(feature = "console")]
use colored::Colorize;

/// Number of levels that can carry a message (everything but Silent).
const OUTPUTS: usize = 7;

/// Default backend. Writes `[LEVEL] prefix: message key=value` lines, Info to
/// stdout and every other level to stderr unless configured otherwise.
///
/// ```
/// use polylog::{args, ConsoleLogger, Level, Logger, SharedBuffer};
///
/// let buf = SharedBuffer::new();
/// let logger = ConsoleLogger::builder()
///     .level(Level::Debug)
///     .prefix("svc")
///     .colors(false)
///     .output_all(buf.clone())
///     .build();
///
/// logger.info(&args!["ready"]);
/// assert_eq!(buf.contents(), "svc: ready\n");
/// ```
#[derive(Debug)]
pub struct ConsoleLogger {
    state: LoggerState,
    outputs: [Sink; OUTPUTS],
    colors: bool,
}

impl ConsoleLogger {
    /// Info threshold, no prefix, standard streams, colours on.
    pub fn new() -> Self {
        ConsoleLoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> ConsoleLoggerBuilder {
        ConsoleLoggerBuilder::new()
    }

    /// Sink used for `level`. `None` for Silent, which never writes.
    pub fn output(&self, level: Level) -> Option<&Sink> {
        self.outputs.get(level as usize)
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    #[cfg(feature = "console")]
    fn paint<'a>(&self, level: Level, line: &'a str) -> Cow<'a, str> {
        if !self.colors {
            return Cow::Borrowed(line);
        }
        match level.color() {
            Some((color, bold)) => {
                // colour the text only, the newline stays plain
                let body = line.trim_end_matches('\n');
                let painted = body.color(color);
                let painted = if bold { painted.bold() } else { painted };
                Cow::Owned(format!("{}{}", painted, &line[body.len()..]))
            }
            None => Cow::Borrowed(line),
        }
    }

    #[cfg(not(feature = "console"))]
    fn paint<'a>(&self, _level: Level, line: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(line)
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for ConsoleLogger {
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
        let line = Pipeline::CONSOLE.compose(level, &self.state.prefix(), message);
        if let Some(sink) = self.output(level) {
            sink.emit(&self.paint(level, &line));
        }
        line
    }
}

impl NamedLogger for ConsoleLogger {
    fn named(&self, name: &str) -> Self {
        Self {
            state: self.state.named(name),
            outputs: self.outputs.clone(),
            colors: self.colors,
        }
    }
}

/// Builder for [`ConsoleLogger`]
pub struct ConsoleLoggerBuilder {
    level: Level,
    prefix: String,
    colors: bool,
    outputs: [Sink; OUTPUTS],
}

impl ConsoleLoggerBuilder {
    pub fn new() -> Self {
        Self {
            level: Level::Info,
            prefix: String::new(),
            colors: cfg!(feature = "console"),
            outputs: std::array::from_fn(|i| match Level::ALL[i].stream() {
                Stream::Stdout => Sink::stdout(),
                Stream::Stderr => Sink::stderr(),
            }),
        }
    }

    /// Set the threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enable or disable level colouring. Without the `console` feature
    /// output is never coloured.
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Route one level to `sink`. Silent has no output and is ignored.
    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, level: Level, sink: impl Into<Sink>) -> Self {
        if let Some(slot) = self.outputs.get_mut(level as usize) {
            *slot = sink.into();
        }
        self
    }

    /// Route every level to the same `sink`.
    #[must_use = "builder methods return a new value"]
    pub fn output_all(mut self, sink: impl Into<Sink>) -> Self {
        let sink = sink.into();
        self.outputs = std::array::from_fn(|_| sink.clone());
        self
    }

    pub fn build(self) -> ConsoleLogger {
        ConsoleLogger {
            state: LoggerState::new(self.level, self.prefix),
            outputs: self.outputs,
            colors: self.colors,
        }
    }
}

impl Default for ConsoleLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
