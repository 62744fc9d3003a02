//! Adapter onto the `tracing` ecosystem
//!
//! Each call becomes one `tracing` event with target `polylog`. The message
//! carries the prefix; fields are rendered in logfmt into a single `fields`
//! value, since `tracing` field names are fixed at compile time.

use crate::core::{FieldMap, FieldStyle, Level, Logger, LoggerState, Message, NamedLogger, Pipeline};
use tracing::level_filters::LevelFilter;

impl Level {
    /// `tracing` has no Panic or Fatal, both map to ERROR. Silent has no
    /// equivalent.
    pub fn to_tracing(&self) -> Option<tracing::Level> {
        match self {
            Level::Trace => Some(tracing::Level::TRACE),
            Level::Debug => Some(tracing::Level::DEBUG),
            Level::Info => Some(tracing::Level::INFO),
            Level::Warn => Some(tracing::Level::WARN),
            Level::Error | Level::Panic | Level::Fatal => Some(tracing::Level::ERROR),
            Level::Silent => None,
        }
    }

    pub fn from_tracing(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Level::Trace,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warn,
            _ => Level::Error,
        }
    }
}

macro_rules! event_at {
    ($level:expr, $($rest:tt)+) => {
        match $level {
            Level::Trace => tracing::event!(target: "polylog", tracing::Level::TRACE, $($rest)+),
            Level::Debug => tracing::event!(target: "polylog", tracing::Level::DEBUG, $($rest)+),
            Level::Info => tracing::event!(target: "polylog", tracing::Level::INFO, $($rest)+),
            Level::Warn => tracing::event!(target: "polylog", tracing::Level::WARN, $($rest)+),
            _ => tracing::event!(target: "polylog", tracing::Level::ERROR, $($rest)+),
        }
    };
}

/// Routes calls to the current `tracing` subscriber.
///
/// The threshold is held here, independently of the subscriber's own
/// filter; both must let an event through for it to be recorded.
#[derive(Debug, Default)]
pub struct TracingLogger {
    state: LoggerState,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the most verbose level any active subscriber accepts.
    pub fn from_subscriber() -> Self {
        let level = LevelFilter::current()
            .into_level()
            .map(Level::from_tracing)
            .unwrap_or(Level::Silent);
        Self {
            state: LoggerState::new(level, ""),
        }
    }
}

impl Logger for TracingLogger {
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
        let (text, fields) = message.resolve();
        let line =
            Pipeline::STRUCTURED.compose_resolved(level, &self.state.prefix(), text, &FieldMap::new());
        if fields.is_empty() {
            event_at!(level, severity = level.name(), "{}", line);
        } else {
            let rendered = fields.render(FieldStyle::Logfmt);
            event_at!(level, severity = level.name(), fields = %rendered, "{}", line);
        }
        line
    }
}

impl NamedLogger for TracingLogger {
    fn named(&self, name: &str) -> Self {
        Self {
            state: self.state.named(name),
        }
    }
}
