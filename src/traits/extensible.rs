//! Targets that the extender can enrich.

use crate::traits::ErrorLike;
use crate::types::{ComposedStack, Properties, StackTrace};

/// An error value that can be constructed by a factory and then enriched
/// with a cause, a property bag and a composed stack.
///
/// Implementors keep the [`StackTrace`] captured when they were built; the
/// extender hands back a [`ComposedStack`] that renders it (minus this
/// crate's frames) in front of the cause's stack on first access.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use ono::traits::{ErrorLike, Extensible};
/// use ono::types::{ComposedStack, Properties, StackTrace};
///
/// struct QuotaError {
///     message: String,
///     stack: ComposedStack,
///     trace: StackTrace,
///     properties: Properties,
/// }
///
/// impl ErrorLike for QuotaError {
///     fn name(&self) -> Cow<'_, str> {
///         Cow::Borrowed("QuotaError")
///     }
///
///     fn message(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.message)
///     }
///
///     fn stack(&self) -> Option<Cow<'_, str>> {
///         Some(Cow::Borrowed(self.stack.as_str()))
///     }
///
///     fn properties(&self) -> Option<&Properties> {
///         Some(&self.properties)
///     }
/// }
///
/// impl Extensible for QuotaError {
///     fn trace(&self) -> &StackTrace {
///         &self.trace
///     }
///
///     fn set_message(&mut self, message: String) {
///         self.message = message;
///     }
///
///     fn set_stack(&mut self, stack: ComposedStack) {
///         self.stack = stack;
///     }
///
///     fn properties_mut(&mut self) -> &mut Properties {
///         &mut self.properties
///     }
/// }
/// ```
pub trait Extensible: ErrorLike {
    /// Frames captured at construction.
    fn trace(&self) -> &StackTrace;

    fn set_message(&mut self, message: String);

    fn set_stack(&mut self, stack: ComposedStack);

    fn properties_mut(&mut self) -> &mut Properties;
}
