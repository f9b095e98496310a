//! A single variadic argument of a factory call.

use serde_json::{Map, Value};

use crate::traits::{is_error_like, ErrorLike};
use crate::types::stack_trace::header;
use crate::types::OnoError;

/// One argument of a factory call, before normalization decides whether it
/// is the cause, the property bag, the message template or a template
/// argument.
///
/// Plain data converts with `From` (strings, numbers, booleans, JSON values
/// and maps). Typed errors are borrowed: `&OnoError` converts directly,
/// other [`ErrorLike`] types go through [`Arg::error`] and foreign
/// [`std::error::Error`]s through [`Arg::std`].
///
/// # Examples
///
/// ```
/// use ono::types::Arg;
/// use serde_json::json;
///
/// let io = std::io::Error::other("disk full");
///
/// assert!(Arg::std(&io).is_error_like());
/// assert!(Arg::from(json!({ "name": "TypeError", "message": "bad" })).is_error_like());
/// assert_eq!(Arg::from("template").as_str(), Some("template"));
/// ```
#[derive(Clone)]
pub enum Arg<'a> {
    /// A typed error value.
    Error(&'a dyn ErrorLike),
    /// A foreign standard-library error.
    Std(&'a (dyn std::error::Error + 'a)),
    /// Plain data.
    Value(Value),
}

impl<'a> Arg<'a> {
    /// Borrows any [`ErrorLike`] value as an argument.
    #[inline]
    pub fn error<E: ErrorLike + 'a>(error: &'a E) -> Self {
        Arg::Error(error)
    }

    /// Borrows a [`std::error::Error`] as an argument.
    #[inline]
    pub fn std<E: std::error::Error + 'a>(error: &'a E) -> Self {
        Arg::Std(error)
    }

    /// The string content, when this argument is a JSON string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Value(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Typed errors always qualify; plain data qualifies when it is an
    /// object with both `name` and `message`.
    pub fn is_error_like(&self) -> bool {
        match self {
            Arg::Error(_) | Arg::Std(_) => true,
            Arg::Value(value) => is_error_like(value),
        }
    }

    /// The argument as a template substitution value. Errors become
    /// `"<name>: <message>"`.
    pub fn into_value(self) -> Value {
        match self {
            Arg::Error(error) => Value::String(header(&error.name(), &error.message())),
            Arg::Std(error) => Value::String(header("Error", &error.to_string())),
            Arg::Value(value) => value,
        }
    }
}

impl<'a> From<&'a OnoError> for Arg<'a> {
    #[inline]
    fn from(error: &'a OnoError) -> Self {
        Arg::Error(error)
    }
}

impl<'a> From<&'a dyn ErrorLike> for Arg<'a> {
    #[inline]
    fn from(error: &'a dyn ErrorLike) -> Self {
        Arg::Error(error)
    }
}

impl<'a> From<&'a (dyn std::error::Error + 'a)> for Arg<'a> {
    #[inline]
    fn from(error: &'a (dyn std::error::Error + 'a)) -> Self {
        Arg::Std(error)
    }
}

impl From<Value> for Arg<'_> {
    #[inline]
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl From<&Value> for Arg<'_> {
    #[inline]
    fn from(value: &Value) -> Self {
        Arg::Value(value.clone())
    }
}

impl From<Map<String, Value>> for Arg<'_> {
    #[inline]
    fn from(map: Map<String, Value>) -> Self {
        Arg::Value(Value::Object(map))
    }
}

impl From<&Map<String, Value>> for Arg<'_> {
    #[inline]
    fn from(map: &Map<String, Value>) -> Self {
        Arg::Value(Value::Object(map.clone()))
    }
}

impl From<&str> for Arg<'_> {
    #[inline]
    fn from(s: &str) -> Self {
        Arg::Value(Value::String(s.to_string()))
    }
}

impl From<String> for Arg<'_> {
    #[inline]
    fn from(s: String) -> Self {
        Arg::Value(Value::String(s))
    }
}

impl From<&String> for Arg<'_> {
    #[inline]
    fn from(s: &String) -> Self {
        Arg::Value(Value::String(s.clone()))
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Arg::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl core::fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Arg::Error(error) => f
                .debug_struct("Error")
                .field("name", &error.name())
                .field("message", &error.message())
                .finish(),
            Arg::Std(error) => f.debug_tuple("Std").field(&error.to_string()).finish(),
            Arg::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}
