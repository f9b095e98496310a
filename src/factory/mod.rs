//! Factories that bind an error type to the normalize → format → construct →
//! extend pipeline.
//!
//! - [`Ono::native`] and the pre-bound [`Ono::error`], [`Ono::type_error`],
//!   [`Ono::range`], ... build [`OnoError`]s of one [`ErrorKind`].
//! - [`Ono::new`] binds any [`Extensible`] type through its constructor.
//! - [`custom`] runs the pipeline once for a one-off constructor.
//!
//! # Examples
//!
//! ```
//! use ono::{args, ErrorKind, Ono};
//! use serde_json::json;
//!
//! let cause = std::io::Error::other("connection reset");
//! let err = Ono::type_error().create(args![
//!     ono::Arg::std(&cause),
//!     json!({ "retryable": true }),
//!     "request %d failed",
//!     7,
//! ]);
//!
//! assert_eq!(err.kind(), ErrorKind::TypeError);
//! assert_eq!(err.message(), "request 7 failed \nconnection reset");
//! assert_eq!(err.property("retryable"), Some(&json!(true)));
//! ```

mod options;

use std::sync::{Arc, OnceLock};

pub use options::Options;

use crate::extend::extend;
use crate::normalize::normalize;
use crate::traits::{ErrorLike, Extensible};
use crate::types::{Arg, ErrorKind, MessageFormatter, OnoError, Properties};

/// Builds the target error from the rendered message.
pub type Constructor<T> = Arc<dyn Fn(String) -> T + Send + Sync>;

/// A bound callable that always produces `T`.
///
/// Cloning shares the constructor; the clone gets its own formatter slot.
pub struct Ono<T> {
    constructor: Constructor<T>,
    options: Options,
}

impl<T> Clone for Ono<T> {
    fn clone(&self) -> Self {
        Self { constructor: Arc::clone(&self.constructor), options: self.options.clone() }
    }
}

impl<T> core::fmt::Debug for Ono<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ono")
            .field("target", &core::any::type_name::<T>())
            .field("options", &self.options)
            .finish()
    }
}

impl<T: Extensible> Ono<T> {
    /// Binds `constructor` with default [`Options`].
    pub fn new<F>(constructor: F) -> Self
    where
        F: Fn(String) -> T + Send + Sync + 'static,
    {
        Self::with_options(constructor, Options::default())
    }

    pub fn with_options<F>(constructor: F, options: Options) -> Self
    where
        F: Fn(String) -> T + Send + Sync + 'static,
    {
        Self { constructor: Arc::new(constructor), options }
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub fn formatter(&self) -> Arc<dyn MessageFormatter> {
        self.options.formatter()
    }

    /// Replaces the formatter for every later call through this factory.
    ///
    /// The pre-bound factories ([`Ono::error`], [`Ono::type_error`], ...)
    /// share one slot, so setting it on any of them changes the formatter
    /// of all of them and of the `ono!` family of macros. Concurrent
    /// setters race; the last write wins.
    pub fn set_formatter<F>(&self, formatter: F)
    where
        F: MessageFormatter + 'static,
    {
        self.options.set_formatter(formatter);
    }

    /// Builds a composed error from variadic arguments.
    ///
    /// A panic raised by the constructor propagates to the caller untouched.
    #[inline(never)]
    pub fn create<'a, I>(&self, args: I) -> T
    where
        I: IntoIterator<Item = Arg<'a>>,
    {
        compose(self.constructor.as_ref(), &self.options, args)
    }

    /// Enriches an error that already exists with a cause and/or props.
    #[inline]
    pub fn extend(target: T, cause: Option<&dyn ErrorLike>, props: Option<&Properties>) -> T {
        extend(target, cause, props)
    }
}

impl Ono<OnoError> {
    /// Factory for one native error kind.
    pub fn native(kind: ErrorKind) -> Self {
        Self::native_with_options(kind, Options::default())
    }

    pub fn native_with_options(kind: ErrorKind, options: Options) -> Self {
        Self::with_options(move |message| OnoError::new(kind, message), options)
    }

    /// Factory bound to the options every pre-bound factory shares.
    fn shared(kind: ErrorKind) -> Self {
        static OPTIONS: OnceLock<Options> = OnceLock::new();
        Self::native_with_options(kind, OPTIONS.get_or_init(Options::default).share())
    }

    /// Plain JSON object for any error-like value.
    #[inline]
    pub fn to_json<E: ErrorLike + ?Sized>(error: &E) -> Properties {
        crate::json::to_json(error)
    }

    /// Shared factory for [`ErrorKind::Error`].
    pub fn error() -> &'static Self {
        static FACTORY: OnceLock<Ono<OnoError>> = OnceLock::new();
        FACTORY.get_or_init(|| Ono::shared(ErrorKind::Error))
    }

    /// Shared factory for [`ErrorKind::EvalError`].
    pub fn eval() -> &'static Self {
        static FACTORY: OnceLock<Ono<OnoError>> = OnceLock::new();
        FACTORY.get_or_init(|| Ono::shared(ErrorKind::EvalError))
    }

    /// Shared factory for [`ErrorKind::RangeError`].
    pub fn range() -> &'static Self {
        static FACTORY: OnceLock<Ono<OnoError>> = OnceLock::new();
        FACTORY.get_or_init(|| Ono::shared(ErrorKind::RangeError))
    }

    /// Shared factory for [`ErrorKind::ReferenceError`].
    pub fn reference() -> &'static Self {
        static FACTORY: OnceLock<Ono<OnoError>> = OnceLock::new();
        FACTORY.get_or_init(|| Ono::shared(ErrorKind::ReferenceError))
    }

    /// Shared factory for [`ErrorKind::SyntaxError`].
    pub fn syntax() -> &'static Self {
        static FACTORY: OnceLock<Ono<OnoError>> = OnceLock::new();
        FACTORY.get_or_init(|| Ono::shared(ErrorKind::SyntaxError))
    }

    /// Shared factory for [`ErrorKind::TypeError`].
    pub fn type_error() -> &'static Self {
        static FACTORY: OnceLock<Ono<OnoError>> = OnceLock::new();
        FACTORY.get_or_init(|| Ono::shared(ErrorKind::TypeError))
    }

    /// Shared factory for [`ErrorKind::UriError`].
    pub fn uri() -> &'static Self {
        static FACTORY: OnceLock<Ono<OnoError>> = OnceLock::new();
        FACTORY.get_or_init(|| Ono::shared(ErrorKind::UriError))
    }

    /// Shared factory for `kind`.
    pub fn for_kind(kind: ErrorKind) -> &'static Self {
        match kind {
            ErrorKind::Error => Self::error(),
            ErrorKind::EvalError => Self::eval(),
            ErrorKind::RangeError => Self::range(),
            ErrorKind::ReferenceError => Self::reference(),
            ErrorKind::SyntaxError => Self::syntax(),
            ErrorKind::TypeError => Self::type_error(),
            ErrorKind::UriError => Self::uri(),
        }
    }
}

/// Runs the pipeline once with a one-off constructor and default options.
///
/// ```
/// use ono::{args, custom, ErrorKind, OnoError};
///
/// let err = custom(|message| OnoError::new(ErrorKind::UriError, message), args!["bad uri %j", "a b"]);
/// assert_eq!(err.to_string(), r#"URIError: bad uri "a b""#);
/// ```
#[inline(never)]
pub fn custom<'a, T, F, I>(constructor: F, args: I) -> T
where
    T: Extensible,
    F: FnOnce(String) -> T,
    I: IntoIterator<Item = Arg<'a>>,
{
    compose(constructor, &Options::default(), args)
}

fn compose<'a, T, F, I>(constructor: F, options: &Options, args: I) -> T
where
    T: Extensible,
    F: FnOnce(String) -> T,
    I: IntoIterator<Item = Arg<'a>>,
{
    let normalized = normalize(args, options);
    let target = constructor(normalized.message);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "ono",
        name = %target.name(),
        has_cause = normalized.cause.is_some(),
        has_props = normalized.props.is_some(),
        "composing error"
    );

    extend(
        target,
        normalized.cause.as_ref().map(|cause| cause as &dyn ErrorLike),
        normalized.props.as_ref(),
    )
}
