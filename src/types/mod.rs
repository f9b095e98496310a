//! Error values, arguments, formatters and stack traces.
//!
//! # Examples
//!
//! ```
//! use ono::types::{ErrorKind, OnoError};
//!
//! let err = OnoError::new(ErrorKind::TypeError, "expected a string")
//!     .with_property("code", "E_TYPE");
//!
//! assert_eq!(err.to_string(), "TypeError: expected a string");
//! assert!(err.stack().starts_with("TypeError: expected a string"));
//! ```
use serde_json::{Map, Value};
use smallvec::SmallVec;

pub mod arg;
pub mod error_kind;
pub mod message_formatter;
pub mod ono_error;
pub mod stack_trace;

pub use arg::*;
pub use error_kind::*;
pub use message_formatter::{to_json_text, to_text, JoinFormatter, MessageFormatter, PrintfFormatter};
pub use ono_error::*;
pub use stack_trace::{ComposedStack, Frame, StackTrace};

/// Own properties of an error, in insertion order.
pub type Properties = Map<String, Value>;

/// SmallVec-backed argument list for factory calls.
///
/// Uses inline storage for up to 4 arguments, which covers the usual
/// cause + props + template + one substitution call without allocating.
pub type Args<'a> = SmallVec<[Arg<'a>; 4]>;
