//! Literal value rendering for generated scripts.
//!
//! Rather than serializing arbitrary untyped input, the renderer works over a
//! small closed algebra of JSON-like values. Same input always renders to the
//! same text; there is nothing cyclic to guard against because values are
//! always fresh literal structures built by the generator.

use crate::error::{GenError, Result};
use serde::{Deserialize, Serialize};

/// Interior indentation used inside rendered object literals.
///
/// Rendered objects carry a fixed one-level indent; nesting them correctly
/// into the surrounding statement is the line formatter's job.
pub const INDENT: &str = "  ";

/// A JSON-like literal value of the target syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsValue {
    /// `null`
    Null,
    /// Boolean literal
    Bool(bool),
    /// Number literal
    Num(f64),
    /// String literal (quoted and escaped on render)
    Str(String),
    /// Array literal: `[a, b]`
    Array(Vec<JsValue>),
    /// Object literal with insertion-ordered fields
    Object(Vec<(String, JsValue)>),
}

impl JsValue {
    /// Create a string value.
    #[must_use]
    pub fn str(text: impl Into<String>) -> Self {
        Self::Str(text.into())
    }

    /// Create a number value.
    #[must_use]
    pub fn num(value: f64) -> Self {
        Self::Num(value)
    }

    /// Create an object value from ordered fields.
    #[must_use]
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, JsValue)>) -> Self {
        Self::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create an object value with no fields.
    #[must_use]
    pub fn empty_object() -> Self {
        Self::Object(Vec::new())
    }

    /// True for `Object` values with no fields.
    #[must_use]
    pub fn is_empty_object(&self) -> bool {
        matches!(self, Self::Object(fields) if fields.is_empty())
    }
}

impl From<serde_json::Value> for JsValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Num(n.as_f64().unwrap_or_default()),
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// Render a value as a literal expression.
///
/// Strings quote with single quotes, arrays render inline, objects render
/// multiline with one field per line and an unindented closing brace. Empty
/// objects render as `{}`.
#[must_use]
pub fn format_value(value: &JsValue) -> String {
    match value {
        JsValue::Null => "null".to_string(),
        JsValue::Bool(b) => b.to_string(),
        JsValue::Num(n) => n.to_string(),
        JsValue::Str(s) => quote(s),
        JsValue::Array(items) => {
            let rendered: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        JsValue::Object(fields) => {
            if fields.is_empty() {
                return "{}".to_string();
            }
            let tokens: Vec<String> = fields
                .iter()
                .map(|(key, value)| format!("{key}: {}", format_value(value)))
                .collect();
            format!("{{\n{INDENT}{}\n}}", tokens.join(&format!(",\n{INDENT}")))
        }
    }
}

/// Render trailing call options.
///
/// Empty objects render as nothing at all, so default-valued calls stay bare
/// (`click('a')` rather than `click('a', {})`). `leading_comma` prefixes the
/// render with `, ` for appending after existing arguments.
#[must_use]
pub fn format_options(value: &JsValue, leading_comma: bool) -> String {
    if value.is_empty_object() {
        return String::new();
    }
    let comma = if leading_comma { ", " } else { "" };
    format!("{comma}{}", format_value(value))
}

/// Render a value, suppressing empty objects entirely.
///
/// Used for boilerplate call sites where an empty options object should emit
/// nothing (`launch()` rather than `launch({})`).
#[must_use]
pub fn format_value_or_empty(value: &JsValue) -> String {
    if value.is_empty_object() {
        return String::new();
    }
    format_value(value)
}

/// Quote a string with single quotes, escaping only the quote character.
#[must_use]
pub fn quote(text: &str) -> String {
    escape_with(text, '\'')
}

/// Quote a string with an explicit delimiter.
///
/// # Errors
///
/// Returns [`GenError::UnsupportedQuoteDelimiter`] for delimiters other than
/// `'`, `"` and `` ` ``.
pub fn quote_with(text: &str, delimiter: char) -> Result<String> {
    match delimiter {
        '\'' | '"' | '`' => Ok(escape_with(text, delimiter)),
        other => Err(GenError::UnsupportedQuoteDelimiter { delimiter: other }),
    }
}

fn escape_with(text: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for c in text.chars() {
        if c == delimiter {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(delimiter);
    out
}
