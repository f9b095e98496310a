//! Message template rendering.
//!
//! [`MessageFormatter`] turns a template plus positional JSON arguments into
//! the final message of an error. [`PrintfFormatter`] is the default and
//! understands printf-style placeholders; [`JoinFormatter`] disables
//! placeholders and joins everything with spaces. Any
//! `Fn(&str, &[Value]) -> String` closure is a formatter as well.
//!
//! # Examples
//!
//! ```
//! use ono::types::message_formatter::{MessageFormatter, PrintfFormatter};
//! use serde_json::json;
//!
//! let message = PrintfFormatter.format("Testing %s, %d, %j", &[json!(1), json!("2"), json!("3")]);
//! assert_eq!(message, r#"Testing 1, 2, "3""#);
//! ```

use serde_json::Value;

/// Trait for rendering an error message from a template and its arguments.
pub trait MessageFormatter: Send + Sync {
    fn format(&self, template: &str, args: &[Value]) -> String;
}

impl<F> MessageFormatter for F
where
    F: Fn(&str, &[Value]) -> String + Send + Sync,
{
    #[inline]
    fn format(&self, template: &str, args: &[Value]) -> String {
        self(template, args)
    }
}

/// printf-style formatter.
///
/// | marker | output |
/// |--------|--------|
/// | `%s` | next argument as text |
/// | `%d`, `%i` | next argument as an integer |
/// | `%f` | next argument as a number |
/// | `%j`, `%o`, `%O` | next argument as compact JSON |
/// | `%%` | a literal `%` |
///
/// Placeholders without a matching argument stay verbatim, and arguments
/// left over once the template is consumed are appended, separated by
/// spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintfFormatter;

impl MessageFormatter for PrintfFormatter {
    fn format(&self, template: &str, args: &[Value]) -> String {
        if args.is_empty() {
            return template.to_string();
        }

        let mut out = String::with_capacity(template.len() + args.len() * 8);
        let mut remaining = args.iter();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }

            let Some(&marker) = chars.peek() else {
                out.push('%');
                break;
            };

            if marker == '%' {
                chars.next();
                out.push('%');
                continue;
            }

            if !matches!(marker, 's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O') {
                out.push('%');
                continue;
            }

            chars.next();
            match remaining.next() {
                Some(arg) => out.push_str(&render_placeholder(marker, arg)),
                None => {
                    out.push('%');
                    out.push(marker);
                }
            }
        }

        for arg in remaining {
            out.push(' ');
            out.push_str(&to_text(arg));
        }

        out
    }
}

/// Formatter used when placeholders are disabled: the template and every
/// argument are joined with single spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinFormatter;

impl MessageFormatter for JoinFormatter {
    fn format(&self, template: &str, args: &[Value]) -> String {
        let mut out = template.to_string();
        for arg in args {
            out.push(' ');
            out.push_str(&to_text(arg));
        }
        out
    }
}

fn render_placeholder(marker: char, arg: &Value) -> String {
    match marker {
        's' => to_text(arg),
        'd' | 'i' => match to_number(arg) {
            Some(n) if n.is_finite() => format_number(n.trunc()),
            Some(n) => format_number(n),
            None => "NaN".to_string(),
        },
        'f' => to_number(arg).map_or_else(|| "NaN".to_string(), format_number),
        _ => to_json_text(arg),
    }
}

/// Text coercion used for `%s` and appended arguments.
///
/// Strings pass through unchanged, numbers print the way a script engine
/// prints them (`10.0` becomes `10`), `null` and booleans print as literals
/// and arrays/objects print as compact JSON.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => format_number(f),
            _ => n.to_string(),
        },
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => to_json_text(value),
    }
}

/// Compact JSON text of a value.
pub fn to_json_text(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "undefined".to_string())
}

fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // -0.0 prints as "0"
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        exponential(n)
    } else {
        // shortest round-trip digits, no trailing ".0"
        n.to_string()
    }
}

/// `1e21` becomes `"1e+21"`, `1.5e-7` stays `"1.5e-7"`.
fn exponential(n: f64) -> String {
    let text = format!("{:e}", n);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
        _ => text,
    }
}
