//! Merging a cause and a property bag onto a freshly built error.
//!
//! [`extend`] consumes its target and hands it back enriched:
//!
//! - a cause that is not error-like (a JSON object without `name` and
//!   `message`) only contributes its properties;
//! - the cause's message is adopted when the target has none;
//! - the cause's properties are copied, then the props bag's (props win);
//! - `name`, `message` and `stack` are never copied as properties;
//! - the stack is recomposed from the target's own frames (this crate's
//!   frames removed) followed by the cause's stack.
//!
//! # Examples
//!
//! ```
//! use ono::{extend, ErrorKind, OnoError};
//! use serde_json::json;
//!
//! let cause = OnoError::new(ErrorKind::SyntaxError, "unexpected token").with_property("line", 3);
//! let props = json!({ "file": "config.toml" });
//!
//! let err = extend(OnoError::new(ErrorKind::Error, ""), Some(&cause), props.as_object());
//!
//! assert_eq!(err.message(), "unexpected token");
//! assert_eq!(err.property("line"), Some(&json!(3)));
//! assert_eq!(err.property("file"), Some(&json!("config.toml")));
//! assert!(err.stack().contains(cause.stack()));
//! ```

use crate::traits::{is_reserved_key, ErrorLike, Extensible};
use crate::types::stack_trace::header;
use crate::types::{ComposedStack, Properties};

/// Enriches `target` with `cause` and `props`, and recomposes its stack.
///
/// Never fails: a missing cause or props bag skips the matching step.
pub fn extend<T>(mut target: T, cause: Option<&dyn ErrorLike>, props: Option<&Properties>) -> T
where
    T: Extensible,
{
    let cause = match cause {
        Some(data) if !data.is_error_like() => {
            if let Some(properties) = data.properties() {
                merge_properties(&mut target, properties);
            }
            None
        }
        cause => cause,
    };

    if let Some(cause) = cause {
        if target.message().is_empty() {
            let message = cause.message();
            if !message.is_empty() {
                target.set_message(message.into_owned());
            }
        }
        if let Some(properties) = cause.properties() {
            merge_properties(&mut target, properties);
        }
    }

    if let Some(props) = props {
        merge_properties(&mut target, props);
    }

    let stack = ComposedStack::new(target.trace().clone(), &target.name(), &target.message())
        .with_cause(cause.map(cause_stack));
    target.set_stack(stack);

    target
}

/// The cause's stack, or its header line when it has none.
fn cause_stack(cause: &dyn ErrorLike) -> String {
    match cause.stack() {
        Some(stack) => stack.into_owned(),
        None => header(&cause.name(), &cause.message()),
    }
}

fn merge_properties<T: Extensible>(target: &mut T, source: &Properties) {
    let properties = target.properties_mut();
    for (key, value) in source {
        if is_reserved_key(key) {
            continue;
        }
        properties.insert(key.clone(), value.clone());
    }
}
