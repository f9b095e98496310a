//! Per-factory configuration.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::types::{JoinFormatter, MessageFormatter, PrintfFormatter};

/// Configuration carried by a factory and passed down to every call made
/// through it.
///
/// The formatter sits in a slot that can be swapped through a shared
/// reference ([`Options::set_formatter`]). Calls already rendering keep the
/// formatter they started with; the last write wins. Cloning gives the clone
/// its own slot.
///
/// # Examples
///
/// ```
/// use ono::{ErrorKind, Ono, Options};
/// use serde_json::Value;
///
/// let options = Options::new()
///     .with_formatter(|template: &str, args: &[Value]| format!("{} ({} args)", template, args.len()))
///     .concat_messages(false);
///
/// let factory = Ono::native_with_options(ErrorKind::Error, options);
/// let err = factory.create(ono::args!["boom", 1, 2]);
/// assert_eq!(err.message(), "boom (2 args)");
/// ```
pub struct Options {
    formatter: Arc<FormatterSlot>,
    pub(crate) concat_messages: bool,
}

type FormatterSlot = RwLock<Arc<dyn MessageFormatter>>;

fn slot(formatter: Arc<dyn MessageFormatter>) -> Arc<FormatterSlot> {
    Arc::new(RwLock::new(formatter))
}

impl Default for Options {
    fn default() -> Self {
        Self { formatter: slot(Arc::new(PrintfFormatter)), concat_messages: true }
    }
}

impl Clone for Options {
    fn clone(&self) -> Self {
        Self { formatter: slot(self.formatter()), concat_messages: self.concat_messages }
    }
}

impl Options {
    /// printf-style formatting, cause messages appended.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholders disabled: the template and its arguments are joined with
    /// spaces.
    #[inline]
    pub fn without_format() -> Self {
        Self { formatter: slot(Arc::new(JoinFormatter)), ..Default::default() }
    }

    /// Replaces the message formatter.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: MessageFormatter + 'static,
    {
        self.formatter = slot(Arc::new(formatter));
        self
    }

    /// Whether a cause's message is appended to the rendered message
    /// (default: true).
    pub fn concat_messages(mut self, enabled: bool) -> Self {
        self.concat_messages = enabled;
        self
    }

    /// The formatter currently in the slot.
    pub fn formatter(&self) -> Arc<dyn MessageFormatter> {
        let current = self.formatter.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    /// Swaps the formatter for every later call, including calls through
    /// other options sharing this slot.
    pub fn set_formatter<F>(&self, formatter: F)
    where
        F: MessageFormatter + 'static,
    {
        let formatter: Arc<dyn MessageFormatter> = Arc::new(formatter);
        let mut current = self.formatter.write().unwrap_or_else(PoisonError::into_inner);
        *current = formatter;
    }

    #[inline]
    pub fn concatenates_messages(&self) -> bool {
        self.concat_messages
    }

    /// Options that share this formatter slot.
    pub(crate) fn share(&self) -> Self {
        Self { formatter: Arc::clone(&self.formatter), concat_messages: self.concat_messages }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("formatter", &"<dyn MessageFormatter>")
            .field("concat_messages", &self.concat_messages)
            .finish()
    }
}
