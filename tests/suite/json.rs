use ono::{args, ono, to_json, ErrorKind, Ono, OnoError, StackTrace};
use serde_json::json;

fn keys(json: &ono::Properties) -> Vec<&str> {
    json.keys().map(String::as_str).collect()
}

#[test]
fn name_message_and_stack_come_first() {
    let err = ono!(json!({ "code": 404, "text": "Not Found" }), "Missing %s", "page");
    let json = to_json(&err);

    assert_eq!(keys(&json), ["name", "message", "stack", "code", "text"]);
    assert_eq!(json["name"], "Error");
    assert_eq!(json["message"], "Missing page");
    assert_eq!(json["stack"], err.stack());
}

#[test]
fn every_kind_reports_its_name() {
    for kind in ErrorKind::ALL {
        let json = to_json(&Ono::for_kind(kind).create(args!["boom"]));
        assert_eq!(json["name"], kind.name());
    }
}

#[test]
fn empty_message_is_kept() {
    let json = to_json(&OnoError::with_trace(ErrorKind::Error, "", StackTrace::empty()));

    assert_eq!(json["message"], "");
    assert_eq!(json["stack"], "Error");
}

#[test]
fn projection_is_idempotent() {
    let err = ono!(json!({ "nested": { "a": [1, 2, 3] } }), "boom");
    let once = to_json(&err);
    let twice = to_json(&once);

    assert_eq!(once, twice);
    assert_eq!(keys(&twice), ["name", "message", "stack", "nested"]);
}

#[test]
fn object_without_stack_has_no_stack_key() {
    let object = json!({ "message": "plain", "extra": true });
    let json = to_json(object.as_object().unwrap());

    assert_eq!(keys(&json), ["name", "message", "extra"]);
    assert_eq!(json["name"], "Error");
}

#[test]
fn std_error_projection() {
    let io = std::io::Error::other("disk full");
    let json = to_json(&ono::StdCause::new(&io));

    assert_eq!(json, *json!({ "name": "Error", "message": "disk full" }).as_object().unwrap());
}

#[test]
fn serialize_matches_projection() {
    let err = ono!(json!({ "code": 7 }), "boom");
    let text = serde_json::to_string(&err).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed, serde_json::Value::Object(to_json(&err)));
    assert!(text.starts_with(r#"{"name":"Error","message":"boom","stack":"#));
}

#[test]
fn inherent_and_static_helpers_agree() {
    let err = ono!("boom");

    assert_eq!(err.to_json(), to_json(&err));
    assert_eq!(Ono::to_json(&err), to_json(&err));
}
