use ono::types::stack_trace::{header, join_stacks, CAUSE_SEPARATOR};
use ono::types::{ComposedStack, Frame, StackTrace};

const SAMPLE: &str = "   0: std::backtrace::Backtrace::force_capture
             at /rustc/library/std/src/backtrace.rs:312:9
   1: ono::types::stack_trace::StackTrace::capture
             at ./src/types/stack_trace.rs:90:20
   2: app::errors::NotFound::new
             at ./src/errors.rs:7:21
   3: core::ops::function::FnOnce::call_once
   4: <ono::types::OnoError as core::clone::Clone>::clone
   5: ono::factory::Ono<T>::create
             at ./src/factory/mod.rs:120:9
   6: app::handlers::load_user
             at ./src/handlers.rs:42:13
   7: onomatopoeia::boom
   8: app::main";

#[test]
fn parse_reads_symbols_and_locations() {
    let trace = StackTrace::parse(SAMPLE);

    assert_eq!(trace.frames().len(), 9);
    assert_eq!(trace.frames()[6], Frame::new("app::handlers::load_user", Some("./src/handlers.rs:42:13".into())));
    assert_eq!(trace.frames()[4].location(), None);
    assert_eq!(trace.frames()[8].symbol(), "app::main");
}

#[test]
fn parse_ignores_disabled_backtraces() {
    assert!(StackTrace::parse("disabled backtrace").is_empty());
    assert!(StackTrace::parse("unsupported backtrace").is_empty());
    assert!(StackTrace::parse("").is_empty());
}

#[test]
fn without_crate_frames_only_capture_machinery_is_hidden() {
    let trace = StackTrace::parse(
        "   0: std::backtrace::Backtrace::force_capture\n   1: app::errors::NotFound::new\n   2: app::main",
    );
    let symbols: Vec<&str> = trace.visible_frames().map(Frame::symbol).collect();

    assert_eq!(symbols, ["app::errors::NotFound::new", "app::main"]);
}

#[test]
fn visible_frames_start_after_the_outermost_crate_frame() {
    let trace = StackTrace::parse(SAMPLE);
    let symbols: Vec<&str> = trace.visible_frames().map(Frame::symbol).collect();

    assert_eq!(symbols, ["app::handlers::load_user", "onomatopoeia::boom", "app::main"]);
}

#[test]
fn render_puts_header_before_frames() {
    let trace = StackTrace::parse(SAMPLE);

    assert_eq!(
        trace.render("TypeError", "bad input"),
        "TypeError: bad input\n    at app::handlers::load_user (./src/handlers.rs:42:13)\n    at onomatopoeia::boom\n    at app::main"
    );
}

#[test]
fn empty_trace_renders_header_only() {
    assert_eq!(StackTrace::empty().render("Error", ""), "Error");
    assert_eq!(StackTrace::empty().render("Error", "boom"), "Error: boom");
}

#[test]
fn header_omits_separator_for_empty_message() {
    assert_eq!(header("RangeError", ""), "RangeError");
    assert_eq!(header("RangeError", "too big"), "RangeError: too big");
}

#[test]
fn join_stacks_separates_with_blank_line() {
    let joined = join_stacks("Error: outer\n    at app::main".to_string(), Some("Error: inner\n    at app::load"));
    assert_eq!(joined, "Error: outer\n    at app::main\n\nError: inner\n    at app::load");
    assert!(joined.contains(CAUSE_SEPARATOR));

    assert_eq!(join_stacks("Error".to_string(), None), "Error");
    assert_eq!(join_stacks("Error".to_string(), Some("")), "Error");
}

#[test]
fn capture_records_the_calling_function() {
    let trace = StackTrace::capture();

    assert!(trace
        .visible_frames()
        .any(|frame| frame.symbol().contains("capture_records_the_calling_function")));
    assert!(trace.visible_frames().all(|frame| !frame.symbol().starts_with("ono::")));
}

#[test]
fn captured_frames_resolve_lazily_and_are_shared_by_clones() {
    let trace = StackTrace::capture();
    let copy = trace.clone();

    assert!(!trace.is_resolved());
    assert!(!copy.frames().is_empty());
    assert!(trace.is_resolved());
}

#[test]
fn composed_stack_joins_own_trace_and_cause() {
    let stack = ComposedStack::new(StackTrace::parse(SAMPLE), "Error", "outer")
        .with_cause(Some("TypeError: inner".to_string()));

    assert!(stack.as_str().starts_with("Error: outer\n    at app::handlers::load_user"));
    assert!(stack.as_str().ends_with("at app::main\n\nTypeError: inner"));
    assert_eq!(stack.to_string(), stack.as_str());

    let without_cause = ComposedStack::new(StackTrace::empty(), "Error", "").with_cause(Some(String::new()));
    assert_eq!(without_cause.as_str(), "Error");
}
