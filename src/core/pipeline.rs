//! Formatting pipeline
//!
//! A line is built by running a `(template, args)` pair through fixed stages:
//!
//! 1. [`unmapped`]: resolve the message text, then append rendered fields
//! 2. [`prefixed`]: prepend `"<prefix>: "`
//! 3. [`levelled`]: prepend the level bracket
//! 4. [`terminated`]: ensure a single trailing newline (raw-stream backends)
//!
//! Every stage only ever prepends or appends `%s` placeholders and pushes the
//! corresponding text as an argument, so user text is never reinterpreted as
//! a template.

use super::args::{parse_args, Arg};
use super::fields::{FieldMap, FieldStyle};
use super::level::Level;
use super::template::{sprint, sprintf};

/// Message half of a call, before any decoration.
#[derive(Debug, Clone, Copy)]
pub enum Message<'a> {
    /// `info(args...)`: values are concatenated
    Args(&'a [Arg]),
    /// `infof(template, args...)`: printf-style substitution
    Template(&'a str, &'a [Arg]),
}

impl<'a> Message<'a> {
    /// Resolve the message text and split off the trailing field map.
    pub fn resolve(&self) -> (String, &'a FieldMap) {
        match *self {
            Message::Args(args) => {
                let (args, fields) = parse_args(args);
                (sprint(args), fields)
            }
            Message::Template(template, args) => {
                let (args, fields) = parse_args(args);
                (sprintf(template, args), fields)
            }
        }
    }
}

/// Running `(template, args)` pair handed from stage to stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Pending {
    pub template: String,
    pub args: Vec<Arg>,
}

impl Pending {
    pub fn new(template: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            template: template.into(),
            args,
        }
    }

    pub fn render(&self) -> String {
        sprintf(&self.template, &self.args)
    }
}

/// When the level bracket is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelLabel {
    /// Backend records the level itself
    Never,
    /// Every level except Info, which stays unadorned
    #[default]
    ExceptInfo,
    Always,
}

/// Stage 1: message text first, fields strictly after it.
pub fn unmapped(message: Message<'_>, style: FieldStyle) -> Pending {
    let (text, fields) = message.resolve();
    resolved(text, fields, style)
}

/// Stage 1 for callers that already resolved the message text.
pub fn resolved(text: String, fields: &FieldMap, style: FieldStyle) -> Pending {
    if fields.is_empty() {
        Pending::new("%s", vec![Arg::from(text)])
    } else {
        Pending::new(
            "%s %s",
            vec![Arg::from(text), Arg::from(fields.render(style))],
        )
    }
}

/// Stage 2: prepend `"<prefix>: "` when a prefix is set.
pub fn prefixed(prefix: &str, pending: Pending) -> Pending {
    if prefix.is_empty() {
        return pending;
    }
    let mut args = Vec::with_capacity(pending.args.len() + 1);
    args.push(Arg::from(prefix));
    args.extend(pending.args);
    Pending::new(format!("%s: {}", pending.template), args)
}

/// Stage 3: prepend the level bracket, so the final order reads
/// `[LEVEL] prefix: message fields`.
pub fn levelled(level: Level, label: LevelLabel, pending: Pending) -> Pending {
    let decorate = match label {
        LevelLabel::Never => false,
        LevelLabel::ExceptInfo => level != Level::Info,
        LevelLabel::Always => true,
    };
    if !decorate {
        return pending;
    }
    let mut args = Vec::with_capacity(pending.args.len() + 1);
    args.push(Arg::from(level.bracket()));
    args.extend(pending.args);
    Pending::new(format!("%s {}", pending.template), args)
}

/// Stage 4: ensure the line ends in a newline.
pub fn terminated(mut line: String) -> String {
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

/// A backend's fixed choice of stage behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipeline {
    pub fields: FieldStyle,
    pub levels: LevelLabel,
    pub terminate: bool,
}

impl Pipeline {
    /// Console shape: `[LEVEL] prefix: message key=value\n`, Info unadorned.
    pub const CONSOLE: Pipeline = Pipeline {
        fields: FieldStyle::Plain,
        levels: LevelLabel::ExceptInfo,
        terminate: true,
    };

    /// Writer shape: every level labelled, fields bracketed.
    pub const WRITER: Pipeline = Pipeline {
        fields: FieldStyle::Bracketed,
        levels: LevelLabel::Always,
        terminate: true,
    };

    /// Structured libraries record level and line endings themselves.
    pub const STRUCTURED: Pipeline = Pipeline {
        fields: FieldStyle::Logfmt,
        levels: LevelLabel::Never,
        terminate: false,
    };

    /// Run all stages in order and render the final string.
    ///
    /// ```
    /// use polylog::{args, fields, Level, Message, Pipeline};
    ///
    /// let call = args!["disk low", fields! { "pct" => 92 }];
    /// let line = Pipeline::CONSOLE.compose(Level::Warn, "", Message::Args(&call));
    /// assert_eq!(line, "[WARN]  disk low pct=92\n");
    /// ```
    pub fn compose(&self, level: Level, prefix: &str, message: Message<'_>) -> String {
        let (text, fields) = message.resolve();
        self.compose_resolved(level, prefix, text, fields)
    }

    /// Stages 2 to 4 on an already resolved message.
    pub fn compose_resolved(
        &self,
        level: Level,
        prefix: &str,
        text: String,
        fields: &FieldMap,
    ) -> String {
        let pending = resolved(text, fields, self.fields);
        let pending = prefixed(prefix, pending);
        let pending = levelled(level, self.levels, pending);
        let line = pending.render();
        if self.terminate {
            terminated(line)
        } else {
            line
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::CONSOLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: Vec<Arg>) -> Vec<Arg> {
        values
    }

    #[test]
    fn test_unmapped_without_fields() {
        let call = args(vec!["foo".into(), "bar".into()]);
        let pending = unmapped(Message::Args(&call), FieldStyle::Plain);
        assert_eq!(pending, Pending::new("%s", vec!["foobar".into()]));
    }

    #[test]
    fn test_unmapped_with_fields() {
        let call = args(vec![
            "Hello %s".into(),
            FieldMap::new().with_field("baz", "qux").into(),
        ]);
        let pending = unmapped(Message::Args(&call), FieldStyle::Bracketed);
        assert_eq!(
            pending,
            Pending::new("%s %s", vec!["Hello %s".into(), "[baz=qux]".into()])
        );
    }

    #[test]
    fn test_unmapped_template() {
        let call = args(vec!["World".into(), FieldMap::new().with_field("n", 1).into()]);
        let pending = unmapped(Message::Template("Hello %s", &call), FieldStyle::Plain);
        assert_eq!(
            pending,
            Pending::new("%s %s", vec!["Hello World".into(), "n=1".into()])
        );
    }

    #[test]
    fn test_prefixed() {
        let pending = Pending::new("%s", vec!["ready".into()]);
        assert_eq!(prefixed("", pending.clone()), pending);
        assert_eq!(
            prefixed("svc", pending),
            Pending::new("%s: %s", vec!["svc".into(), "ready".into()])
        );
    }

    #[test]
    fn test_levelled() {
        let pending = Pending::new("%s", vec!["msg".into()]);
        assert_eq!(levelled(Level::Info, LevelLabel::ExceptInfo, pending.clone()), pending);
        assert_eq!(levelled(Level::Error, LevelLabel::Never, pending.clone()), pending);
        assert_eq!(
            levelled(Level::Error, LevelLabel::ExceptInfo, pending.clone()),
            Pending::new("%s %s", vec!["[ERROR]".into(), "msg".into()])
        );
        assert_eq!(
            levelled(Level::Info, LevelLabel::Always, pending),
            Pending::new("%s %s", vec!["[INFO] ".into(), "msg".into()])
        );
    }

    #[test]
    fn test_terminated() {
        assert_eq!(terminated("a".to_string()), "a\n");
        assert_eq!(terminated("a\n".to_string()), "a\n");
        assert_eq!(terminated(String::new()), "\n");
    }

    #[test]
    fn test_compose_order() {
        let call = args(vec!["disk low".into(), FieldMap::new().with_field("pct", 92).into()]);
        let line = Pipeline::CONSOLE.compose(Level::Warn, "svc.db", Message::Args(&call));
        assert_eq!(line, "[WARN]  svc.db: disk low pct=92\n");
    }

    #[test]
    fn test_compose_info_is_unadorned() {
        let call = args(vec!["ready".into()]);
        let line = Pipeline::CONSOLE.compose(Level::Info, "svc", Message::Args(&call));
        assert_eq!(line, "svc: ready\n");
    }

    #[test]
    fn test_compose_writer_shape() {
        let call = args(vec!["foo bar".into(), FieldMap::new().with_field("baz", "qux").into()]);
        let line = Pipeline::WRITER.compose(Level::Info, "", Message::Args(&call));
        assert_eq!(line, "[INFO]  foo bar [baz=qux]\n");
    }

    #[test]
    fn test_compose_structured_shape() {
        let call = args(vec!["World".into()]);
        let line = Pipeline::STRUCTURED.compose(Level::Error, "api", Message::Template("Hello %s", &call));
        assert_eq!(line, "api: Hello World");
    }

    #[test]
    fn test_prefix_with_percent_is_literal() {
        let call = args(vec!["x".into()]);
        let line = Pipeline::CONSOLE.compose(Level::Info, "100%s", Message::Args(&call));
        assert_eq!(line, "100%s: x\n");
    }
}
