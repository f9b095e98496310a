//! Captured call stacks and their text rendering.
//!
//! A [`StackTrace`] holds the frames captured when an error value was
//! constructed. Rendering prefixes the frames with a `"<name>: <message>"`
//! header and drops every frame that belongs to this crate, so the first
//! visible frame is the code that asked for the error.
//!
//! # Examples
//!
//! ```
//! use ono::types::StackTrace;
//!
//! let trace = StackTrace::parse(
//!     "   0: app::load_config\n             at ./src/main.rs:10:5\n   1: app::main",
//! );
//! assert_eq!(trace.frames().len(), 2);
//! assert_eq!(
//!     trace.render("Error", "boom"),
//!     "Error: boom\n    at app::load_config (./src/main.rs:10:5)\n    at app::main"
//! );
//! ```

use core::fmt::{self, Display};
use std::backtrace::Backtrace;
use std::sync::{Arc, OnceLock};

const CRATE_NAME: &str = env!("CARGO_CRATE_NAME");

/// Line placed between an error's own trace and its cause's stack.
pub const CAUSE_SEPARATOR: &str = "\n\n";

/// One resolved frame of a captured stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    symbol: String,
    location: Option<String>,
}

impl Frame {
    /// Creates a frame from a demangled symbol and an optional `file:line:col`.
    pub fn new(symbol: impl Into<String>, location: Option<String>) -> Self {
        Self { symbol: symbol.into(), location }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Frames recorded by the backtrace machinery itself.
    fn is_capture_machinery(&self) -> bool {
        self.symbol.starts_with("std::backtrace")
            || self.symbol.starts_with("<std::backtrace")
            || self.symbol.starts_with("backtrace::")
    }

    /// Frames of this crate, including trait impls of its own types.
    fn is_internal(&self) -> bool {
        let symbol = self.symbol.strip_prefix('<').unwrap_or(&self.symbol);
        symbol
            .strip_prefix(CRATE_NAME)
            .is_some_and(|rest| rest.starts_with("::"))
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "at {} ({})", self.symbol, location),
            None => write!(f, "at {}", self.symbol),
        }
    }
}

/// Frames captured at the construction site of an error.
///
/// Capturing only records the raw backtrace. Symbols are resolved the first
/// time the frames are read, so errors whose stack is never looked at do not
/// pay for resolution. Clones share the capture and its resolved frames.
#[derive(Debug, Clone, Default)]
pub struct StackTrace {
    inner: Arc<TraceInner>,
}

#[derive(Debug, Default)]
struct TraceInner {
    captured: Option<Backtrace>,
    frames: OnceLock<Vec<Frame>>,
}

impl StackTrace {
    /// Captures the current call stack, regardless of `RUST_BACKTRACE`.
    #[inline(never)]
    pub fn capture() -> Self {
        let inner = TraceInner { captured: Some(Backtrace::force_capture()), frames: OnceLock::new() };
        Self { inner: Arc::new(inner) }
    }

    /// A trace without frames. Rendering yields only the header line.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the text form of [`std::backtrace::Backtrace`].
    ///
    /// Frame lines look like `"  3: crate::module::function"`, optionally
    /// followed by an `"at file:line:col"` line. Anything else (such as
    /// `"disabled backtrace"`) is ignored.
    pub fn parse(text: &str) -> Self {
        let inner = TraceInner { captured: None, frames: OnceLock::from(parse_frames(text)) };
        Self { inner: Arc::new(inner) }
    }

    /// Resolved frames, innermost first.
    pub fn frames(&self) -> &[Frame] {
        let inner = &self.inner;
        inner.frames.get_or_init(|| {
            inner
                .captured
                .as_ref()
                .map(|backtrace| parse_frames(&backtrace.to_string()))
                .unwrap_or_default()
        })
    }

    /// Whether symbols have been resolved yet.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.inner.frames.get().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.frames().is_empty()
    }

    /// Iterates the frames a caller should see.
    ///
    /// Everything up to and including this crate's outermost frame is
    /// skipped, which also hides constructors and closure shims invoked from
    /// inside the crate. Capture machinery is always skipped.
    pub fn visible_frames(&self) -> impl Iterator<Item = &Frame> {
        let frames = self.frames();
        let start = frames.iter().rposition(Frame::is_internal).map_or(0, |index| index + 1);
        frames[start..].iter().filter(|frame| !frame.is_capture_machinery())
    }

    /// Renders the header line followed by one `"    at ..."` line per
    /// visible frame.
    pub fn render(&self, name: &str, message: &str) -> String {
        self.render_below(header(name, message))
    }

    fn render_below(&self, mut out: String) -> String {
        for frame in self.visible_frames() {
            out.push_str("\n    ");
            out.push_str(&frame.to_string());
        }
        out
    }
}

fn parse_frames(text: &str) -> Vec<Frame> {
    let mut frames: Vec<Frame> = Vec::new();
    let mut location_open = false;

    for line in text.lines() {
        let line = line.trim();
        if let Some(location) = line.strip_prefix("at ") {
            if location_open {
                if let Some(frame) = frames.last_mut() {
                    frame.location = Some(location.to_string());
                }
                location_open = false;
            }
            continue;
        }

        let Some((index, symbol)) = line.split_once(": ") else {
            continue;
        };
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }

        frames.push(Frame::new(symbol.trim(), None));
        location_open = true;
    }

    frames
}

/// The full stack of a composed error: its own trace under a header line,
/// then the cause's stack. The text is built on first access.
///
/// ```
/// use ono::types::{ComposedStack, StackTrace};
///
/// let stack = ComposedStack::new(StackTrace::empty(), "Error", "outer")
///     .with_cause(Some("TypeError: inner".to_string()));
/// assert_eq!(stack.as_str(), "Error: outer\n\nTypeError: inner");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComposedStack {
    trace: StackTrace,
    header: String,
    cause: Option<String>,
    text: OnceLock<String>,
}

impl ComposedStack {
    pub fn new(trace: StackTrace, name: &str, message: &str) -> Self {
        Self { trace, header: header(name, message), cause: None, text: OnceLock::new() }
    }

    /// Appends `cause` beneath the own trace. Empty causes are ignored.
    pub fn with_cause(mut self, cause: Option<String>) -> Self {
        self.cause = cause.filter(|cause| !cause.is_empty());
        self.text = OnceLock::new();
        self
    }

    pub fn as_str(&self) -> &str {
        self.text.get_or_init(|| {
            join_stacks(self.trace.render_below(self.header.clone()), self.cause.as_deref())
        })
    }
}

impl Display for ComposedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `"<name>: <message>"`, or just the name when the message is empty.
pub fn header(name: &str, message: &str) -> String {
    if message.is_empty() {
        name.to_string()
    } else {
        format!("{}: {}", name, message)
    }
}

/// Appends a cause's stack beneath an error's own rendered trace.
pub fn join_stacks(own: String, cause: Option<&str>) -> String {
    match cause {
        Some(cause) if !cause.is_empty() => {
            let mut joined = own;
            joined.push_str(CAUSE_SEPARATOR);
            joined.push_str(cause);
            joined
        }
        _ => own,
    }
}
