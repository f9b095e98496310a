//! Core traits for reading and enriching errors.
//!
//! - [`ErrorLike`]: read-only view of anything that looks like an error
//! - [`Extensible`]: error values a factory can build and the extender can enrich
//!
//! # Examples
//!
//! ```
//! use ono::traits::{is_error_like, ErrorLike};
//! use serde_json::json;
//!
//! let value = json!({ "name": "TypeError", "message": "bad token", "code": 7 });
//! assert!(is_error_like(&value));
//!
//! let object = value.as_object().unwrap();
//! assert_eq!(object.name(), "TypeError");
//! assert_eq!(object.message(), "bad token");
//! ```

pub mod error_like;
pub mod extensible;

pub use error_like::{is_error_like, is_reserved_key, ErrorLike, StdCause, RESERVED_KEYS};
pub use extensible::Extensible;
