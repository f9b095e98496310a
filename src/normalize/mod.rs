//! Classification of variadic factory arguments.
//!
//! A factory call takes any mixture of an optional cause, an optional
//! property bag and an optional message template with its arguments.
//! [`normalize`] works out which is which, in this order:
//!
//! 1. no arguments at all: empty message, no cause, no props;
//! 2. a leading error-like argument is the cause;
//! 3. the next argument, unless it is a string, fills the props slot;
//! 4. a string after that is the template, everything behind it its
//!    substitution arguments.
//!
//! Nothing is ever rejected. Values that cannot serve the slot they landed
//! in are dropped.
//!
//! # Examples
//!
//! ```
//! use ono::{args, normalize, ErrorLike, Options};
//! use serde_json::json;
//!
//! let normalized = normalize(
//!     args![json!({ "name": "SyntaxError", "message": "bad token" }), "parse failed at %d", 12],
//!     &Options::new(),
//! );
//!
//! assert_eq!(normalized.message, "parse failed at 12 \nbad token");
//! assert_eq!(normalized.cause.as_ref().map(|c| c.name().into_owned()), Some("SyntaxError".into()));
//! assert!(normalized.props.is_none());
//! ```

use std::borrow::Cow;

use serde_json::Value;
use smallvec::SmallVec;

use crate::factory::Options;
use crate::traits::{is_reserved_key, ErrorLike, StdCause};
use crate::types::{Arg, Properties};

/// Separator placed between a rendered message and its cause's message.
pub const MESSAGE_SEPARATOR: &str = " \n";

/// The cause recognized by [`normalize`].
#[derive(Clone)]
pub enum Cause<'a> {
    /// A typed error value.
    Error(&'a dyn ErrorLike),
    /// A foreign standard-library error.
    Std(StdCause<'a>),
    /// A JSON object exposing `name` and `message`.
    Object(Properties),
}

impl ErrorLike for Cause<'_> {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Cause::Error(error) => error.name(),
            Cause::Std(error) => error.name(),
            Cause::Object(object) => object.name(),
        }
    }

    fn message(&self) -> Cow<'_, str> {
        match self {
            Cause::Error(error) => error.message(),
            Cause::Std(error) => error.message(),
            Cause::Object(object) => object.message(),
        }
    }

    fn stack(&self) -> Option<Cow<'_, str>> {
        match self {
            Cause::Error(error) => error.stack(),
            Cause::Std(error) => error.stack(),
            Cause::Object(object) => object.stack(),
        }
    }

    fn properties(&self) -> Option<&Properties> {
        match self {
            Cause::Error(error) => error.properties(),
            Cause::Std(error) => error.properties(),
            Cause::Object(object) => object.properties(),
        }
    }

    /// Normalization already accepted this value as the cause.
    fn is_error_like(&self) -> bool {
        true
    }
}

impl core::fmt::Debug for Cause<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cause")
            .field("name", &self.name())
            .field("message", &self.message())
            .field("properties", &self.properties())
            .finish()
    }
}

impl<'a> Cause<'a> {
    fn from_arg(arg: Arg<'a>) -> Option<Self> {
        match arg {
            Arg::Error(error) => Some(Cause::Error(error)),
            Arg::Std(error) => Some(Cause::Std(StdCause::new(error))),
            Arg::Value(Value::Object(object)) => Some(Cause::Object(object)),
            Arg::Value(_) => None,
        }
    }
}

/// Result of [`normalize`]: at most one cause, at most one props bag, and a
/// message that is always a string.
#[derive(Debug, Clone, Default)]
pub struct NormalizedArgs<'a> {
    pub cause: Option<Cause<'a>>,
    pub props: Option<Properties>,
    pub message: String,
}

/// Classifies `args` and renders the message with the options' formatter.
///
/// When the options concatenate messages and the cause has a message, it is
/// appended after [`MESSAGE_SEPARATOR`] (or becomes the whole message when
/// nothing was rendered).
pub fn normalize<'a, I>(args: I, options: &Options) -> NormalizedArgs<'a>
where
    I: IntoIterator<Item = Arg<'a>>,
{
    let mut args = args.into_iter().peekable();
    let mut normalized = NormalizedArgs::default();

    if args.peek().is_some_and(Arg::is_error_like) {
        normalized.cause = args.next().and_then(Cause::from_arg);
    }

    if args.peek().is_some_and(|arg| arg.as_str().is_none()) {
        normalized.props = args.next().and_then(props_from_arg);
    }

    match args.next() {
        Some(Arg::Value(Value::String(template))) => {
            let params: SmallVec<[Value; 4]> = args.map(Arg::into_value).collect();
            normalized.message = options.formatter().format(&template, &params);
        }
        Some(_other) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "ono", arg = ?_other, "no message template; ignoring remaining arguments");
        }
        None => {}
    }

    if options.concatenates_messages() {
        if let Some(cause) = &normalized.cause {
            let cause_message = cause.message();
            if !cause_message.is_empty() {
                if !normalized.message.is_empty() {
                    normalized.message.push_str(MESSAGE_SEPARATOR);
                }
                normalized.message.push_str(&cause_message);
            }
        }
    }

    normalized
}

/// Only objects can be merged. An error in the props slot contributes its
/// properties; scalars and arrays are dropped.
fn props_from_arg(arg: Arg<'_>) -> Option<Properties> {
    match arg {
        Arg::Value(Value::Object(object)) => Some(object),
        Arg::Error(error) => Some(
            error
                .properties()
                .map(|props| {
                    props
                        .iter()
                        .filter(|(key, _)| !is_reserved_key(key))
                        .map(|(key, value)| (key.clone(), value.clone()))
                        .collect()
                })
                .unwrap_or_default(),
        ),
        _other => {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "ono", arg = ?_other, "props slot value is not an object; ignoring it");
            None
        }
    }
}
