//! Logger configuration
//!
//! Configuration can come from defaults, environment variables or a JSON
//! document, and is turned into a ready logger with [`LoggerConfig::build`].

use super::error::{LoggerError, Result};
use super::level::Level;
use super::logger::Logger;
use super::sink::Sink;
use crate::backends::{ConsoleLogger, RecordFormat, StructuredLogger};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Output shape selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Console lines
    #[default]
    Text,
    Json,
    Logfmt,
}

impl FromStr for LogFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "console" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "logfmt" => Ok(LogFormat::Logfmt),
            other => Err(LoggerError::config(
                "format",
                format!("unknown format '{}', expected text, json or logfmt", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Threshold name; unknown names map to Silent
    pub level: Level,

    /// When set, overrides `level` with Debug
    pub debug: bool,

    pub prefix: String,

    /// Colour console output
    pub colors: bool,

    pub format: LogFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            debug: false,
            prefix: String::new(),
            colors: true,
            format: LogFormat::Text,
        }
    }
}

impl LoggerConfig {
    /// Read `POLYLOG_LEVEL`, `POLYLOG_DEBUG`, `POLYLOG_PREFIX`,
    /// `POLYLOG_COLOR` and `POLYLOG_FORMAT`. Unset variables keep defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = lookup("POLYLOG_LEVEL") {
            config.level = Level::from_name(&level);
        }
        if let Some(debug) = lookup("POLYLOG_DEBUG") {
            config.debug = parse_flag(&debug);
        }
        if let Some(prefix) = lookup("POLYLOG_PREFIX") {
            config.prefix = prefix;
        }
        if let Some(colors) = lookup("POLYLOG_COLOR") {
            config.colors = parse_flag(&colors);
        }
        if let Some(format) = lookup("POLYLOG_FORMAT") {
            config.format = format.parse()?;
        }
        Ok(config)
    }

    /// Parse a JSON document; missing keys keep defaults.
    ///
    /// ```
    /// use polylog::{Level, LoggerConfig};
    ///
    /// let config = LoggerConfig::from_json(r#"{"level": "WARNING", "prefix": "api"}"#).unwrap();
    /// assert_eq!(config.level, Level::Warn);
    /// assert_eq!(config.prefix, "api");
    /// assert!(config.colors);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn effective_level(&self) -> Level {
        if self.debug {
            Level::Debug
        } else {
            self.level
        }
    }

    /// Set threshold and prefix on an existing logger of any backend.
    pub fn apply(&self, logger: &dyn Logger) {
        logger.set_level(self.effective_level());
        logger.set_prefix(&self.prefix);
    }

    /// Build a logger writing to the standard streams: console lines for
    /// `text`, records on stderr for `json` and `logfmt`.
    pub fn build(&self) -> Arc<dyn Logger> {
        match self.format {
            LogFormat::Text => Arc::new(
                ConsoleLogger::builder()
                    .level(self.effective_level())
                    .prefix(self.prefix.as_str())
                    .colors(self.colors)
                    .build(),
            ),
            LogFormat::Json => self.structured(RecordFormat::Json),
            LogFormat::Logfmt => self.structured(RecordFormat::Logfmt),
        }
    }

    fn structured(&self, format: RecordFormat) -> Arc<dyn Logger> {
        let logger = StructuredLogger::new(Sink::stderr()).with_format(format);
        self.apply(&logger);
        Arc::new(logger)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
