//! The error type built by the native factories.

use std::borrow::Cow;
use std::fmt::{self, Display};

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::traits::{is_reserved_key, ErrorLike, Extensible};
use crate::types::stack_trace::header;
use crate::types::{ComposedStack, ErrorKind, Properties, StackTrace};

/// An error of one of the native [`ErrorKind`]s with a message, a composed
/// stack and an ordered bag of extra properties.
///
/// `OnoError` serializes through [`to_json`](crate::json::to_json), so the
/// name, message and stack appear in JSON output alongside every property.
///
/// # Examples
///
/// ```
/// use ono::{ErrorKind, OnoError};
///
/// let err = OnoError::new(ErrorKind::RangeError, "index out of bounds")
///     .with_property("index", 12);
///
/// assert_eq!(err.to_string(), "RangeError: index out of bounds");
/// assert_eq!(err.property("index"), Some(&serde_json::json!(12)));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct OnoError {
    kind: ErrorKind,
    message: String,
    stack: ComposedStack,
    trace: StackTrace,
    properties: Properties,
}

impl OnoError {
    /// Creates an error and captures the current call stack.
    #[inline(never)]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::with_trace(kind, message, StackTrace::capture())
    }

    /// Creates an error around an already captured (or empty) trace.
    pub fn with_trace(kind: ErrorKind, message: impl Into<String>, trace: StackTrace) -> Self {
        let message = message.into();
        let stack = ComposedStack::new(trace.clone(), kind.name(), &message);
        Self { kind, message, stack, trace, properties: Properties::new() }
    }

    /// Adds a property. Reserved keys (`name`, `message`, `stack`) are ignored.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !is_reserved_key(&key) {
            self.properties.insert(key, value.into());
        }
        self
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The composed stack. Frames are resolved on the first call.
    #[inline]
    pub fn stack(&self) -> &str {
        self.stack.as_str()
    }

    #[inline]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    #[inline]
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Plain JSON object with name, message, stack and every property.
    pub fn to_json(&self) -> Properties {
        crate::json::to_json(self)
    }
}

impl ErrorLike for OnoError {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.kind.name())
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }

    fn stack(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.stack.as_str()))
    }

    fn properties(&self) -> Option<&Properties> {
        Some(&self.properties)
    }
}

impl Extensible for OnoError {
    fn trace(&self) -> &StackTrace {
        &self.trace
    }

    fn set_message(&mut self, message: String) {
        self.message = message;
    }

    fn set_stack(&mut self, stack: ComposedStack) {
        self.stack = stack;
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

impl Display for OnoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(self.stack.as_str());
        }
        f.write_str(&header(self.kind.name(), &self.message))
    }
}

impl std::error::Error for OnoError {}

impl Serialize for OnoError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
