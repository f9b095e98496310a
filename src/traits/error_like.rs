//! Structural view shared by every value that can act as an error.
//!
//! [`ErrorLike`] is a capability check rather than a type check: a typed
//! [`OnoError`](crate::types::OnoError), a foreign [`std::error::Error`]
//! (through [`StdCause`]) and a plain JSON object that carries both `name`
//! and `message` keys all qualify.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::types::message_formatter::to_text;
use crate::types::Properties;

/// Keys that are first-class fields of an error and never plain properties.
pub const RESERVED_KEYS: [&str; 3] = ["name", "message", "stack"];

/// Returns `true` for `name`, `message` and `stack`.
#[inline]
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Minimal contract of an error: a name, a message, an optional stack and
/// an ordered set of own properties.
pub trait ErrorLike {
    fn name(&self) -> Cow<'_, str>;

    fn message(&self) -> Cow<'_, str>;

    fn stack(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// Own enumerable properties in insertion order.
    ///
    /// May contain reserved keys (a JSON object cause does); consumers skip
    /// them with [`is_reserved_key`].
    fn properties(&self) -> Option<&Properties> {
        None
    }

    /// Whether this value may serve as a cause. Typed errors always can;
    /// plain objects only when they carry both `name` and `message`.
    fn is_error_like(&self) -> bool {
        true
    }
}

impl<T: ErrorLike + ?Sized> ErrorLike for &T {
    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }

    fn message(&self) -> Cow<'_, str> {
        (**self).message()
    }

    fn stack(&self) -> Option<Cow<'_, str>> {
        (**self).stack()
    }

    fn properties(&self) -> Option<&Properties> {
        (**self).properties()
    }

    fn is_error_like(&self) -> bool {
        (**self).is_error_like()
    }
}

/// Duck-typed check: a JSON object counts as an error when it exposes both
/// a `name` and a `message`.
#[inline]
pub fn is_error_like(value: &Value) -> bool {
    value.as_object().is_some_and(|map| map.contains_key("name") && map.contains_key("message"))
}

fn text_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<Cow<'a, str>> {
    match map.get(key)? {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Null => None,
        other => Some(Cow::Owned(to_text(other))),
    }
}

/// A JSON object read as an error. Missing fields read as empty strings.
impl ErrorLike for Map<String, Value> {
    fn name(&self) -> Cow<'_, str> {
        text_field(self, "name").unwrap_or(Cow::Borrowed("Error"))
    }

    fn message(&self) -> Cow<'_, str> {
        text_field(self, "message").unwrap_or(Cow::Borrowed(""))
    }

    fn stack(&self) -> Option<Cow<'_, str>> {
        text_field(self, "stack")
    }

    fn properties(&self) -> Option<&Properties> {
        Some(self)
    }

    fn is_error_like(&self) -> bool {
        self.contains_key("name") && self.contains_key("message")
    }
}

/// Borrowed adapter that lets any [`std::error::Error`] act as a cause.
///
/// The name is always `"Error"` and there are no properties; the message is
/// the error's `Display` output.
///
/// ```
/// use ono::traits::{ErrorLike, StdCause};
///
/// let io = std::io::Error::other("disk full");
/// let cause = StdCause::new(&io);
/// assert_eq!(cause.message(), "disk full");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StdCause<'a> {
    error: &'a (dyn std::error::Error + 'a),
}

impl<'a> StdCause<'a> {
    pub fn new(error: &'a (dyn std::error::Error + 'a)) -> Self {
        Self { error }
    }
}

impl ErrorLike for StdCause<'_> {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("Error")
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Owned(self.error.to_string())
    }
}
