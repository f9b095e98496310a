//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use ono::prelude::*;
//!
//! fn parse_port(raw: &str) -> Result<u16, OnoError> {
//!     raw.parse::<u16>()
//!         .map_err(|e| ono_range!(Arg::std(&e), json!({ "input": raw }), "invalid port %j", raw))
//! }
//!
//! let err = parse_port("http").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::RangeError);
//! assert_eq!(err.property("input"), Some(&json!("http")));
//! ```

// Macros
pub use crate::{args, ono, ono_custom, ono_eval, ono_range, ono_reference, ono_syntax, ono_type, ono_uri};

// Core types
pub use crate::factory::{Ono, Options};
pub use crate::types::{Arg, ErrorKind, OnoError, Properties};

// Traits
pub use crate::traits::{ErrorLike, Extensible};

// Static utilities
pub use crate::extend::extend;
pub use crate::json::to_json;

pub use serde_json::json;
