//! Positional argument substitution for message templates
//!
//! A message template contains zero or more `{}` markers. The i-th marker,
//! counted left to right, is replaced with the i-th supplied value:
//!
//! ```
//! use named_logger::core::template::{substitute, Value};
//!
//! let body = substitute("a{}b{}c", &[Value::from(&"X"), Value::from(&"Y")]);
//! assert_eq!(body, "aXbYc");
//!
//! // Unused markers stay, surplus values are ignored
//! assert_eq!(substitute("a{}b{}c", &[Value::from(&"X")]), "aXb{}c");
//! assert_eq!(substitute("a{}b", &[Value::from(&1), Value::from(&2)]), "a1b");
//! ```

use std::fmt::{self, Write as _};

/// The marker replaced by positional values.
pub const PLACEHOLDER: &str = "{}";

/// A single substitution value; null renders as the empty string.
#[derive(Clone, Copy)]
pub struct Value<'a>(Option<&'a dyn fmt::Display>);

impl Value<'static> {
    pub const NULL: Value<'static> = Value(None);
}

impl<'a, T: fmt::Display> From<&'a T> for Value<'a> {
    fn from(value: &'a T) -> Self {
        Value(Some(value))
    }
}

impl<'a, T: fmt::Display> From<Option<&'a T>> for Value<'a> {
    fn from(value: Option<&'a T>) -> Self {
        Value(value.map(|v| v as &dyn fmt::Display))
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "Value({:?})", value.to_string()),
            None => f.write_str("Value(null)"),
        }
    }
}

/// Inline `values` into `template`, left to right.
///
/// Only the template is scanned: text produced by a value is never treated
/// as a marker.
pub fn substitute(template: &str, values: &[Value<'_>]) -> String {
    let mut out = String::with_capacity(template.len() + values.len() * 8);
    let mut rest = template;

    for value in values {
        match rest.find(PLACEHOLDER) {
            Some(idx) => {
                out.push_str(&rest[..idx]);
                // Writing into a String cannot fail
                let _ = write!(out, "{}", value);
                rest = &rest[idx + PLACEHOLDER.len()..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

/// Number of markers in `template`.
pub fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}
