//! The native error kinds that ono binds factories for.

use core::fmt::{self, Display};
use serde::{Deserialize, Serialize};

/// Native error kind of an [`OnoError`](crate::types::OnoError).
///
/// Each kind maps to the conventional error name used in stack headers and
/// JSON output (`"TypeError"`, `"RangeError"`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Generic error.
    #[default]
    Error,
    /// Error raised while evaluating code.
    EvalError,
    /// Value outside of its allowed range.
    RangeError,
    /// Reference to something that does not exist.
    ReferenceError,
    /// Malformed input.
    SyntaxError,
    /// Value of the wrong type.
    TypeError,
    /// Malformed URI.
    #[serde(rename = "URIError")]
    UriError,
}

impl ErrorKind {
    /// All kinds, in declaration order.
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::Error,
        ErrorKind::EvalError,
        ErrorKind::RangeError,
        ErrorKind::ReferenceError,
        ErrorKind::SyntaxError,
        ErrorKind::TypeError,
        ErrorKind::UriError,
    ];

    /// Returns the conventional error name for this kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::UriError => "URIError",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
