use ono::{args, ono, ono_custom, ono_eval, ono_range, ono_reference, ono_syntax, ono_type, ono_uri, Arg, ErrorKind, OnoError};
use serde_json::json;

use crate::support::HttpError;

#[test]
fn args_collects_mixed_values() {
    let cause = ono!("inner");
    let list = args![&cause, json!({ "a": 1 }), "%s and %d", "x", 2, 1.5, true];

    assert_eq!(list.len(), 7);
    assert!(list[0].is_error_like());
    assert_eq!(list[2].as_str(), Some("%s and %d"));
    assert!(list.spilled());
}

#[test]
fn args_accepts_trailing_comma_and_empty() {
    let empty: ono::Args<'_> = args![];
    assert!(empty.is_empty());

    let list = args!["a", "b",];
    assert_eq!(list.len(), 2);
}

#[test]
fn each_kind_macro_builds_its_kind() {
    let errors: [(OnoError, ErrorKind); 7] = [
        (ono!("boom"), ErrorKind::Error),
        (ono_eval!("boom"), ErrorKind::EvalError),
        (ono_range!("boom"), ErrorKind::RangeError),
        (ono_reference!("boom"), ErrorKind::ReferenceError),
        (ono_syntax!("boom"), ErrorKind::SyntaxError),
        (ono_type!("boom"), ErrorKind::TypeError),
        (ono_uri!("boom"), ErrorKind::UriError),
    ];

    for (err, kind) in errors {
        assert_eq!(err.kind(), kind);
        assert_eq!(err.message(), "boom");
    }
}

#[test]
fn macro_with_cause_props_and_template() {
    let inner = ono_syntax!(json!({ "line": 3 }), "unexpected token");
    let err = ono_type!(&inner, json!({ "file": "a.toml" }), "cannot load %s", "a.toml");

    assert_eq!(err.message(), "cannot load a.toml \nunexpected token");
    assert_eq!(err.property("line"), Some(&json!(3)));
    assert_eq!(err.property("file"), Some(&json!("a.toml")));
    assert!(err.stack().ends_with(inner.stack()));
}

#[test]
fn macro_without_arguments() {
    let err = ono_reference!();

    assert_eq!(err.message(), "");
    assert_eq!(err.to_string(), "ReferenceError");
}

#[test]
fn std_error_through_arg() {
    let parse = "abc".parse::<u16>().unwrap_err();
    let err = ono!(Arg::std(&parse), "bad port");

    assert_eq!(err.message(), "bad port \ninvalid digit found in string");
}

#[test]
fn custom_macro_uses_given_constructor() {
    let err = ono_custom!(HttpError::new, json!({ "status": 404 }), "GET %s", "/");

    assert_eq!(err.message, "GET /");
    assert_eq!(err.properties["status"], 404);

    let bare = ono_custom!(HttpError::new);
    assert_eq!(bare.message, "");
}
