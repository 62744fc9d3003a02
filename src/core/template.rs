//! Message text resolution
//!
//! Two call shapes resolve to the same text: [`sprint`] concatenates values,
//! [`sprintf`] substitutes a printf-style template. Template mismatches are
//! embedded inline as `%!` markers and never abort the call.

use super::args::Arg;
use super::fields::FieldValue;
use std::fmt::Write;

/// Concatenate arguments. A space separates two neighbours only when neither
/// of them is a string, so `("foo", "bar")` gives `foobar` and `(1, 2)` gives
/// `1 2`.
pub fn sprint(args: &[Arg]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 && !arg.is_string() && !args[i - 1].is_string() {
            out.push(' ');
        }
        let _ = write!(out, "{}", arg);
    }
    out
}

/// Substitute `args` into a printf-style `template`.
///
/// Supported verbs: `%v %s %q %d %f %x %X %t %T %%`, flags `-` and `0`, a
/// width and a `.precision`. A width or precision above one million is
/// dropped and marked `%!(BADWIDTH)` or `%!(BADPREC)`.
///
/// ```
/// use polylog::{args, sprintf};
///
/// assert_eq!(sprintf("Hello %s", &args!["World"]), "Hello World");
/// assert_eq!(sprintf("%5.1f|%-4d|", &args![3.14159, 7]), "  3.1|7   |");
/// assert_eq!(sprintf("%d", &args![]), "%!d(MISSING)");
/// ```
pub fn sprintf(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.left = true,
                '0' => spec.zero = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = read_number(&mut chars);
        if spec.width.map_or(false, |w| w > MAX_WIDTH) {
            out.push_str("%!(BADWIDTH)");
            spec.width = None;
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            match read_number(&mut chars).unwrap_or(0) {
                p if p > MAX_WIDTH => out.push_str("%!(BADPREC)"),
                p => spec.precision = Some(p),
            }
        }

        let verb = match chars.next() {
            Some(v) => v,
            None => {
                out.push_str("%!(NOVERB)");
                break;
            }
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(next_arg) {
            Some(arg) => {
                next_arg += 1;
                match format_verb(verb, &spec, arg) {
                    Some(text) => out.push_str(&spec.pad(text)),
                    None => {
                        let _ = write!(out, "%!{}({}={})", verb, arg.kind(), arg);
                    }
                }
            }
            None => {
                let _ = write!(out, "%!{}(MISSING)", verb);
            }
        }
    }

    if next_arg < args.len() {
        let extra = args[next_arg..]
            .iter()
            .map(|a| format!("{}={}", a.kind(), a))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(out, "%!(EXTRA {})", extra);
    }

    out
}

/// Widths and precisions above this are rejected with an inline marker.
const MAX_WIDTH: usize = 1_000_000;

#[derive(Debug, Default)]
struct Spec {
    left: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Spec {
    fn pad(&self, text: String) -> String {
        let width = match self.width {
            Some(w) => w,
            None => return text,
        };
        let len = text.chars().count();
        if len >= width {
            return text;
        }
        let fill = width - len;
        if self.left {
            format!("{}{}", text, " ".repeat(fill))
        } else if self.zero {
            // zeros go after a leading sign
            match text.strip_prefix('-') {
                Some(digits) => format!("-{}{}", "0".repeat(fill), digits),
                None => format!("{}{}", "0".repeat(fill), text),
            }
        } else {
            format!("{}{}", " ".repeat(fill), text)
        }
    }
}

fn read_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        chars.next();
    }
    value
}

/// Render one argument for one verb, or `None` when the kinds mismatch.
fn format_verb(verb: char, spec: &Spec, arg: &Arg) -> Option<String> {
    let value = match arg {
        Arg::Value(v) => v,
        Arg::Fields(map) => {
            return match verb {
                'v' | 's' => Some(map.to_string()),
                'T' => Some(arg.kind().to_string()),
                _ => None,
            }
        }
    };

    match (verb, value) {
        ('v', FieldValue::Float(f)) => Some(match spec.precision {
            Some(p) => fixed(*f, p),
            None => f.to_string(),
        }),
        ('v', v) => Some(truncate(v.to_string(), spec.precision)),
        ('s', FieldValue::String(_) | FieldValue::Bytes(_)) => {
            Some(truncate(value.to_string(), spec.precision))
        }
        ('q', FieldValue::String(s)) => Some(format!("{:?}", s)),
        ('q', FieldValue::Bytes(b)) => Some(format!("{:?}", String::from_utf8_lossy(b))),
        ('d', FieldValue::Int(i)) => Some(i.to_string()),
        ('d', FieldValue::UInt(u)) => Some(u.to_string()),
        ('f' | 'F', FieldValue::Float(f)) => Some(fixed(*f, spec.precision.unwrap_or(6))),
        ('x', FieldValue::Int(i)) if *i < 0 => Some(format!("-{:x}", i.unsigned_abs())),
        ('x', FieldValue::Int(i)) => Some(format!("{:x}", i)),
        ('X', FieldValue::Int(i)) if *i < 0 => Some(format!("-{:X}", i.unsigned_abs())),
        ('X', FieldValue::Int(i)) => Some(format!("{:X}", i)),
        ('x', FieldValue::UInt(u)) => Some(format!("{:x}", u)),
        ('X', FieldValue::UInt(u)) => Some(format!("{:X}", u)),
        ('x', FieldValue::String(s)) => Some(hex(s.as_bytes(), false)),
        ('X', FieldValue::String(s)) => Some(hex(s.as_bytes(), true)),
        ('x', FieldValue::Bytes(b)) => Some(hex(b, false)),
        ('X', FieldValue::Bytes(b)) => Some(hex(b, true)),
        ('t', FieldValue::Bool(b)) => Some(b.to_string()),
        ('T', v) => Some(v.kind().to_string()),
        _ => None,
    }
}

/// Fixed-point rendering. Every f64 has an exact decimal expansion within
/// `EXACT` fractional digits, so longer precisions only add zeros.
fn fixed(f: f64, precision: usize) -> String {
    const EXACT: usize = 1100;
    let mut text = format!("{:.*}", precision.min(EXACT), f);
    if precision > EXACT && f.is_finite() {
        text.extend(std::iter::repeat('0').take(precision - EXACT));
    }
    text
}

fn truncate(text: String, precision: Option<usize>) -> String {
    match precision {
        Some(p) if text.chars().count() > p => text.chars().take(p).collect(),
        _ => text,
    }
}

fn hex(bytes: &[u8], upper: bool) -> String {
    bytes.iter().fold(String::new(), |mut acc, b| {
        let _ = if upper {
            write!(acc, "{:02X}", b)
        } else {
            write!(acc, "{:02x}", b)
        };
        acc
    })
}
