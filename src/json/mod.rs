//! Plain JSON projection of errors.
//!
//! Standard error values carry their name, message and stack outside of
//! their ordinary fields, so a naive serializer loses them. [`to_json`]
//! builds an ordered JSON object that always has them, followed by every
//! other own property in insertion order.
//!
//! The projection of a projection is the projection itself: the output is a
//! JSON object with `name` and `message`, which is error-like again.
//!
//! # Examples
//!
//! ```
//! use ono::{ono, to_json};
//! use serde_json::json;
//!
//! let err = ono!(json!({ "code": 404 }), "Not found: %s", "/index.html");
//! let json = to_json(&err);
//!
//! let keys: Vec<&str> = json.keys().map(String::as_str).collect();
//! assert_eq!(keys, ["name", "message", "stack", "code"]);
//! assert_eq!(json["message"], "Not found: /index.html");
//! assert_eq!(to_json(&json), json);
//! ```

use serde_json::Value;

use crate::traits::{is_reserved_key, ErrorLike};
use crate::types::Properties;

/// Returns `name`, `message`, `stack` (when present) and every other own
/// property of `error` as an ordered JSON object.
///
/// No cycle detection is attempted; JSON values cannot form cycles.
pub fn to_json<E>(error: &E) -> Properties
where
    E: ErrorLike + ?Sized,
{
    let mut json = Properties::new();
    json.insert("name".to_string(), Value::String(error.name().into_owned()));
    json.insert("message".to_string(), Value::String(error.message().into_owned()));
    if let Some(stack) = error.stack() {
        json.insert("stack".to_string(), Value::String(stack.into_owned()));
    }

    if let Some(properties) = error.properties() {
        for (key, value) in properties {
            if !is_reserved_key(key) {
                json.insert(key.clone(), value.clone());
            }
        }
    }

    json
}
