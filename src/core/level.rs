//! Level definitions

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Ordered severity. A call at level `L` passes the gate of a logger whose
/// threshold is `T` iff `L >= T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Panic = 5,
    Fatal = 6,
    Silent = 7,
}

/// Standard stream a level is routed to by console-style backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Level {
    pub const ALL: [Level; 8] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Panic,
        Level::Fatal,
        Level::Silent,
    ];

    /// Lowercase display name. `Warn` is spelled `warning`.
    pub fn name(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warning",
            Level::Error => "error",
            Level::Panic => "panic",
            Level::Fatal => "fatal",
            Level::Silent => "silent",
        }
    }

    /// Fixed-width label. Five-letter labels set the width, shorter ones are
    /// padded with a trailing space; `Silent` has no label.
    pub fn bracket(&self) -> &'static str {
        match self {
            Level::Trace => "[TRACE]",
            Level::Debug => "[DEBUG]",
            Level::Info => "[INFO] ",
            Level::Warn => "[WARN] ",
            Level::Error => "[ERROR]",
            Level::Panic => "[PANIC]",
            Level::Fatal => "[FATAL]",
            Level::Silent => "",
        }
    }

    pub fn stream(&self) -> Stream {
        match self {
            Level::Info => Stream::Stdout,
            _ => Stream::Stderr,
        }
    }

    /// Panic and Fatal terminate control flow after the line is written.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Level::Panic | Level::Fatal)
    }

    /// Map a configuration string to a level, case- and whitespace-insensitive.
    ///
    /// Anything unrecognised maps to [`Level::Silent`], so a typo in
    /// configuration silences output rather than crashing.
    ///
    /// ```
    /// use polylog::Level;
    ///
    /// assert_eq!(Level::from_name(" WARNING "), Level::Warn);
    /// assert_eq!(Level::from_name("off"), Level::Silent);
    /// assert_eq!(Level::from_name("verbose"), Level::Silent);
    /// ```
    pub fn from_name(s: &str) -> Self {
        s.parse().unwrap_or(Level::Silent)
    }

    /// `true` maps to Debug, `false` to Info.
    pub fn from_debug(debug: bool) -> Self {
        if debug {
            Level::Debug
        } else {
            Level::Info
        }
    }

    #[cfg(feature = "console")]
    pub fn color(&self) -> Option<(colored::Color, bool)> {
        use colored::Color::*;
        match self {
            Level::Trace => Some((BrightGreen, false)),
            Level::Debug => Some((BrightWhite, false)),
            Level::Info => None,
            Level::Warn => Some((BrightYellow, false)),
            Level::Error => Some((BrightRed, false)),
            Level::Panic | Level::Fatal => Some((BrightRed, true)),
            Level::Silent => Some((White, false)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "panic" => Ok(Level::Panic),
            "fatal" => Ok(Level::Fatal),
            "silent" | "off" => Ok(Level::Silent),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// Lossy on purpose: unknown names deserialize to Silent.
impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Level::from_name(&s))
    }
}
