use ono::types::message_formatter::{to_json_text, to_text};
use ono::{JoinFormatter, MessageFormatter, PrintfFormatter};
use serde_json::{json, Value};

fn printf(template: &str, args: &[Value]) -> String {
    PrintfFormatter.format(template, args)
}

#[test]
fn placeholders_consume_arguments_in_order() {
    assert_eq!(printf("Testing %s, %d, %j", &[json!(1), json!("2"), json!("3")]), r#"Testing 1, 2, "3""#);
}

#[test]
fn arguments_without_placeholders_are_appended() {
    assert_eq!(printf("Testing", &[json!(1), json!("2"), json!("3")]), "Testing 1 2 3");
}

#[test]
fn leftover_arguments_are_appended_after_placeholders() {
    assert_eq!(printf("%s:", &[json!("a"), json!("b"), json!(true)]), "a: b true");
}

#[test]
fn template_without_arguments_is_verbatim() {
    assert_eq!(printf("Testing %s, %d, %j", &[]), "Testing %s, %d, %j");
    assert_eq!(printf("100%%", &[]), "100%%");
}

#[test]
fn unmatched_placeholders_stay_verbatim() {
    assert_eq!(printf("%s and %s and %d", &[json!("a")]), "a and %s and %d");
}

#[test]
fn percent_escape_and_unknown_markers() {
    assert_eq!(printf("%d%% done", &[json!(50)]), "50% done");
    assert_eq!(printf("%x %s", &[json!("a")]), "%x a");
    assert_eq!(printf("100%", &[json!("a")]), "100% a");
}

#[test]
fn integer_markers_truncate_and_parse() {
    assert_eq!(printf("%d", &[json!(4.7)]), "4");
    assert_eq!(printf("%i", &[json!(-3.9)]), "-3");
    assert_eq!(printf("%d", &[json!(" 42 ")]), "42");
    assert_eq!(printf("%d", &[json!("12abc")]), "NaN");
    assert_eq!(printf("%d", &[json!({ "a": 1 })]), "NaN");
    assert_eq!(printf("%d", &[json!(true)]), "1");
}

#[test]
fn float_marker_keeps_fraction() {
    assert_eq!(printf("%f", &[json!("1.5")]), "1.5");
    assert_eq!(printf("%f", &[json!(2)]), "2");
}

#[test]
fn json_markers_quote_strings() {
    assert_eq!(printf("%j", &[json!("x")]), r#""x""#);
    assert_eq!(printf("%o", &[json!({ "a": [1, 2] })]), r#"{"a":[1,2]}"#);
    assert_eq!(printf("%O", &[Value::Null]), "null");
}

#[test]
fn text_coercion_follows_script_rules() {
    assert_eq!(to_text(&json!("plain")), "plain");
    assert_eq!(to_text(&json!(10.0)), "10");
    assert_eq!(to_text(&json!(2.5)), "2.5");
    assert_eq!(to_text(&json!(-7)), "-7");
    assert_eq!(to_text(&Value::Null), "null");
    assert_eq!(to_text(&json!(false)), "false");
    assert_eq!(to_text(&json!([1, "a"])), r#"[1,"a"]"#);
    assert_eq!(to_json_text(&json!("a")), r#""a""#);
}

#[test]
fn join_formatter_ignores_placeholders() {
    assert_eq!(JoinFormatter.format("a %s", &[json!(1), json!("b")]), "a %s 1 b");
    assert_eq!(JoinFormatter.format("alone", &[]), "alone");
}

#[test]
fn closures_are_formatters() {
    let upper = |template: &str, _args: &[Value]| template.to_uppercase();
    assert_eq!(upper.format("shout", &[json!(1)]), "SHOUT");
}

#[test]
fn large_and_tiny_numbers_use_exponent_notation() {
    assert_eq!(to_text(&json!(1e21)), "1e+21");
    assert_eq!(to_text(&json!(1.2345e25)), "1.2345e+25");
    assert_eq!(to_text(&json!(1.5e-7)), "1.5e-7");
    assert_eq!(to_text(&json!(0.000001)), "0.000001");
    assert_eq!(to_text(&json!(123456789012345680000.0)), "123456789012345680000");
    assert_eq!(printf("%s and %f", &[json!(1e21), json!(-2e-9)]), "1e+21 and -2e-9");
}
