//! Structured backend: one JSON or logfmt record per call
//!
//! The level and fields are record keys rather than decorations, so the
//! message goes through [`Pipeline::STRUCTURED`] (prefix only, no level label,
//! no trailing newline) and fields are written next to it.

use crate::core::fields::{escape_logfmt_value, quote_logfmt_value};
use crate::core::{
    FieldMap, FieldStyle, Level, Logger, LoggerState, Message, NamedLogger, Pipeline, Result,
    Sink,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Record encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// `key=value` pairs per line
    Logfmt,
}

const RESERVED_KEYS: [&str; 3] = ["timestamp", "level", "message"];

/// Writes machine-readable records.
///
/// ```
/// use polylog::{args, fields, Logger, NamedLogger, RecordFormat, SharedBuffer, StructuredLogger};
///
/// let buf = SharedBuffer::new();
/// let logger = StructuredLogger::new(buf.clone())
///     .with_format(RecordFormat::Logfmt)
///     .with_timestamps(false)
///     .with_prefix("api");
///
/// logger.warn(&args!["disk low", fields! { "pct" => 92 }]);
/// assert_eq!(buf.contents(), "level=warning message=\"api: disk low\" pct=92\n");
/// ```
#[derive(Debug)]
pub struct StructuredLogger {
    state: LoggerState,
    sink: Sink,
    format: RecordFormat,
    timestamps: bool,
}

impl StructuredLogger {
    /// JSON records with timestamps, Info threshold.
    pub fn new(sink: impl Into<Sink>) -> Self {
        Self {
            state: LoggerState::default(),
            sink: sink.into(),
            format: RecordFormat::default(),
            timestamps: true,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    /// Include an RFC 3339 UTC timestamp (millisecond precision) per record.
    #[must_use]
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    fn timestamp(&self) -> Option<String> {
        self.timestamps
            .then(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Encode one record. Field keys that collide with the record's own keys
    /// are nested under `fields.`.
    fn record(&self, level: Level, message: &str, fields: &FieldMap) -> Result<String> {
        match self.format {
            RecordFormat::Json => {
                let mut record = Map::new();
                if let Some(ts) = self.timestamp() {
                    record.insert("timestamp".into(), Value::String(ts));
                }
                record.insert("level".into(), Value::String(level.name().into()));
                record.insert("message".into(), Value::String(message.into()));
                for (key, value) in fields.iter() {
                    record.insert(json_key(key), value.to_json_value());
                }
                Ok(serde_json::to_string(&Value::Object(record))?)
            }
            RecordFormat::Logfmt => {
                let mut parts = Vec::with_capacity(3);
                if let Some(ts) = self.timestamp() {
                    parts.push(format!("timestamp={}", ts));
                }
                parts.push(format!("level={}", level.name()));
                parts.push(format!("message={}", quote_message(message)));
                if !fields.is_empty() {
                    let renamed: FieldMap = fields
                        .iter()
                        .map(|(k, v)| (json_key(k), v.clone()))
                        .collect();
                    parts.push(renamed.render(FieldStyle::Logfmt));
                }
                Ok(parts.join(" "))
            }
        }
    }
}

fn json_key(key: &str) -> String {
    if RESERVED_KEYS.contains(&key) {
        format!("fields.{}", key)
    } else {
        key.to_string()
    }
}

/// Messages are always quoted unless they are a single bare word.
fn quote_message(message: &str) -> String {
    if message.contains(char::is_whitespace) {
        quote_logfmt_value(message)
    } else {
        escape_logfmt_value(message)
    }
}

impl Logger for StructuredLogger {
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
        let line = Pipeline::STRUCTURED.compose_resolved(
            level,
            &self.state.prefix(),
            text,
            &FieldMap::new(),
        );
        match self.record(level, &line, fields) {
            Ok(record) => self.sink.emit(&format!("{}\n", record)),
            Err(e) => eprintln!("[LOGGER ERROR] Failed to encode record: {}", e),
        }
        line
    }
}

impl NamedLogger for StructuredLogger {
    fn named(&self, name: &str) -> Self {
        Self {
            state: self.state.named(name),
            sink: self.sink.clone(),
            format: self.format,
            timestamps: self.timestamps,
        }
    }
}
