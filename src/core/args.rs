//! Call arguments and the trailing-field-map parser

use super::fields::{FieldMap, FieldValue};
use std::fmt;

/// One argument of a log call: either a printable value or a field map.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(FieldValue),
    Fields(FieldMap),
}

impl Arg {
    pub fn is_string(&self) -> bool {
        matches!(self, Arg::Value(v) if v.is_string())
    }

    /// Kind name used in inline template error markers.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Value(v) => v.kind(),
            Arg::Fields(_) => "map",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Value(v) => v.fmt(f),
            Arg::Fields(m) => m.fmt(f),
        }
    }
}

impl From<FieldMap> for Arg {
    fn from(map: FieldMap) -> Self {
        Arg::Fields(map)
    }
}

impl<T: Into<FieldValue>> From<T> for Arg {
    fn from(value: T) -> Self {
        Arg::Value(value.into())
    }
}

static NO_FIELDS: FieldMap = FieldMap::new();

/// Split a trailing field map off an argument list.
///
/// If the last argument is a [`FieldMap`] it is returned separately and
/// excluded from the message arguments; otherwise the list is returned
/// unchanged alongside an empty map. Never fails, never copies.
///
/// ```
/// use polylog::{args, fields, parse_args};
///
/// let call = args!["disk low", fields! { "pct" => 92 }];
/// let (message, fields) = parse_args(&call);
/// assert_eq!(message.len(), 1);
/// assert_eq!(fields.len(), 1);
/// ```
pub fn parse_args(args: &[Arg]) -> (&[Arg], &FieldMap) {
    match args.split_last() {
        Some((Arg::Fields(map), rest)) => (rest, map),
        _ => (args, &NO_FIELDS),
    }
}
