//! Variadic entry points.
//!
//! - [`macro@crate::args`] - Collects any mix of causes, props, templates and
//!   template arguments into an [`Args`](crate::types::Args) list.
//! - [`macro@crate::ono`] - Builds an `Error` through the shared factory.
//! - [`macro@crate::ono_eval`], [`macro@crate::ono_range`],
//!   [`macro@crate::ono_reference`], [`macro@crate::ono_syntax`],
//!   [`macro@crate::ono_type`], [`macro@crate::ono_uri`] - Same, for the other
//!   native kinds.
//! - [`macro@crate::ono_custom`] - One-off call with a caller-supplied
//!   constructor.
//!
//! # Examples
//!
//! ```
//! use ono::{ono, ono_range, ErrorKind};
//! use serde_json::json;
//!
//! let cause = ono!("disk full");
//! let err = ono_range!(&cause, json!({ "free": 0 }), "cannot write %d bytes", 512);
//!
//! assert_eq!(err.kind(), ErrorKind::RangeError);
//! assert_eq!(err.message(), "cannot write 512 bytes \ndisk full");
//! assert_eq!(err.property("free"), Some(&json!(0)));
//! ```

/// Collects variadic arguments into an [`Args`](crate::types::Args) list.
///
/// Each argument goes through `Arg::from`, so strings, numbers, booleans,
/// JSON values and `&OnoError` can be mixed freely.
///
/// # Examples
///
/// ```
/// use ono::args;
///
/// let args = args!["%s of %d", "page", 3];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut args = $crate::types::Args::new();
        $(
            args.push($crate::types::Arg::from($arg));
        )*
        args
    }};
}

/// Creates an `Error` from a cause, props and/or a message template.
///
/// # Examples
///
/// ```
/// use ono::ono;
///
/// let err = ono!("Testing %s, %d, %j", 1, "2", "3");
/// assert_eq!(err.message(), r#"Testing 1, 2, "3""#);
///
/// let empty = ono!();
/// assert_eq!(empty.message(), "");
/// ```
#[macro_export]
macro_rules! ono {
    ($($arg:expr),* $(,)?) => {
        $crate::Ono::error().create($crate::args![$($arg),*])
    };
}

/// Creates an `EvalError`. Takes the same arguments as [`ono!`](crate::ono).
#[macro_export]
macro_rules! ono_eval {
    ($($arg:expr),* $(,)?) => {
        $crate::Ono::eval().create($crate::args![$($arg),*])
    };
}

/// Creates a `RangeError`. Takes the same arguments as [`ono!`](crate::ono).
#[macro_export]
macro_rules! ono_range {
    ($($arg:expr),* $(,)?) => {
        $crate::Ono::range().create($crate::args![$($arg),*])
    };
}

/// Creates a `ReferenceError`. Takes the same arguments as [`ono!`](crate::ono).
#[macro_export]
macro_rules! ono_reference {
    ($($arg:expr),* $(,)?) => {
        $crate::Ono::reference().create($crate::args![$($arg),*])
    };
}

/// Creates a `SyntaxError`. Takes the same arguments as [`ono!`](crate::ono).
#[macro_export]
macro_rules! ono_syntax {
    ($($arg:expr),* $(,)?) => {
        $crate::Ono::syntax().create($crate::args![$($arg),*])
    };
}

/// Creates a `TypeError`. Takes the same arguments as [`ono!`](crate::ono).
#[macro_export]
macro_rules! ono_type {
    ($($arg:expr),* $(,)?) => {
        $crate::Ono::type_error().create($crate::args![$($arg),*])
    };
}

/// Creates a `URIError`. Takes the same arguments as [`ono!`](crate::ono).
#[macro_export]
macro_rules! ono_uri {
    ($($arg:expr),* $(,)?) => {
        $crate::Ono::uri().create($crate::args![$($arg),*])
    };
}

/// Runs the pipeline once for a caller-supplied constructor.
///
/// The first argument is a `FnOnce(String) -> T` where `T` implements
/// [`Extensible`](crate::traits::Extensible); the rest are the usual
/// variadic arguments.
///
/// # Examples
///
/// ```
/// use ono::{ono_custom, ErrorKind, OnoError};
///
/// let err = ono_custom!(
///     |message| OnoError::new(ErrorKind::SyntaxError, message),
///     "unexpected %s",
///     "EOF"
/// );
/// assert_eq!(err.to_string(), "SyntaxError: unexpected EOF");
/// ```
#[macro_export]
macro_rules! ono_custom {
    ($constructor:expr $(, $arg:expr)* $(,)?) => {
        $crate::custom($constructor, $crate::args![$($arg),*])
    };
}
