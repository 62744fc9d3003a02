//! Core contract: levels, fields, the formatting pipeline and the logger traits

pub mod args;
pub mod config;
pub mod error;
pub mod fields;
pub mod level;
pub mod logger;
pub mod pipeline;
pub mod sink;
pub mod template;

pub use args::{parse_args, Arg};
pub use config::{LogFormat, LoggerConfig};
pub use error::{LoggerError, Result};
pub use fields::{FieldMap, FieldStyle, FieldValue};
pub use level::{Level, Stream};
pub use logger::{
    join_prefix, terminate, trim_prefix_suffix, LogPanic, Logger, LoggerState, NamedLogger,
    PREFIX_SUFFIX,
};
pub use pipeline::{
    levelled, prefixed, resolved, terminated, unmapped, LevelLabel, Message, Pending, Pipeline,
};
pub use sink::{SharedBuffer, Sink};
pub use template::{sprint, sprintf};
