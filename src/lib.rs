//! Ono builds errors from any mix of a cause, a property bag and a
//! printf-style message, and makes sure nothing is lost on the way:
//! the cause's properties are carried over, its stack is nested under the
//! new one, and the result serializes to JSON with its name, message and
//! stack included.
//!
//! # Examples
//!
//! ## Message Templates
//!
//! ```
//! use ono::ono;
//!
//! let err = ono!("Testing %s, %d", "1", 2);
//! assert_eq!(err.message(), "Testing 1, 2");
//! ```
//!
//! ## Wrapping a Cause
//!
//! ```
//! use ono::{ono, ono_syntax};
//! use serde_json::json;
//!
//! let inner = ono_syntax!(json!({ "line": 3 }), "unexpected token");
//! let err = ono!(&inner, "could not load config");
//!
//! assert_eq!(err.message(), "could not load config \nunexpected token");
//! assert_eq!(err.property("line"), Some(&json!(3)));
//! assert!(err.stack().contains(inner.stack()));
//! ```
//!
//! ## Custom Factories
//!
//! ```
//! use ono::{args, ErrorKind, Ono, Options};
//! use serde_json::Value;
//!
//! let dollar = |template: &str, args: &[Value]| {
//!     args.iter().enumerate().fold(template.to_string(), |message, (i, arg)| {
//!         message.replacen(&format!("${}", i), &arg.to_string(), 1)
//!     })
//! };
//!
//! let factory = Ono::native_with_options(ErrorKind::RangeError, Options::new().with_formatter(dollar));
//! let err = factory.create(args!["$0 must be greater than $1", 4, 10]);
//! assert_eq!(err.message(), "4 must be greater than 10");
//! ```
//!
//! ## JSON Output
//!
//! ```
//! use ono::ono;
//! use serde_json::json;
//!
//! let err = ono!(json!({ "code": 404 }), "Not Found");
//! let value = serde_json::to_value(&err).unwrap();
//!
//! assert_eq!(value["name"], "Error");
//! assert_eq!(value["message"], "Not Found");
//! assert_eq!(value["code"], 404);
//! ```

/// Pre-bound and custom error factories
pub mod factory;
/// Merging causes and property bags onto new errors
pub mod extend;
/// JSON projection of errors
pub mod json;
/// Variadic entry-point macros
pub mod macros;
/// Classification of variadic arguments
pub mod normalize;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for reading and enriching errors
pub mod traits;
/// Error values, arguments, formatters and stack traces
pub mod types;

pub use extend::extend;
pub use factory::{custom, Constructor, Ono, Options};
pub use json::to_json;
pub use normalize::{normalize, Cause, NormalizedArgs};
pub use traits::{ErrorLike, Extensible, StdCause};
pub use types::{
    Arg, Args, ComposedStack, ErrorKind, JoinFormatter, MessageFormatter, OnoError, PrintfFormatter,
    Properties, StackTrace,
};
